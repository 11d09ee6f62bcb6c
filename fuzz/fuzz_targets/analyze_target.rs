#![no_main]

use clausewise::{AnalysisOptions, Analyzer, RuleCatalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = clausewise::utils::decode_text(data) {
        let options = AnalysisOptions {
            regulations: Some(vec!["GDPR".to_string(), "unknown".to_string()]),
            clause_types: vec!["termination".to_string(), "liability".to_string()],
            question: None,
        };
        let _ = Analyzer::new(RuleCatalog::builtin()).analyze(text, &options);
    }
});
