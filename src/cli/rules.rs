use anyhow::Result;

use clausewise::output::format_catalog;

use super::load_config;
use crate::RulesArgs;

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let catalog = config.build_catalog()?;
    let format = args.format.unwrap_or(config.output.format);
    print!("{}", format_catalog(&catalog, format));
    Ok(())
}
