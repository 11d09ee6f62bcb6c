pub const PRESET_BALANCED: &str = r#"[analysis]
regulations = []
clause_types = []

[catalog]
disable = []

[output]
format = "terminal"
color = true

[profiles.ci.output]
format = "json"
color = false
"#;

pub const PRESET_PRIVACY: &str = r#"[analysis]
regulations = ["GDPR", "CCPA"]
clause_types = ["confidentiality", "termination"]
fail_below = 60.0

[catalog]
disable = ["SOX"]

[output]
format = "terminal"
color = true

[profiles.ci.output]
format = "json"
color = false
"#;

pub const PRESET_FINANCIAL: &str = r#"[analysis]
regulations = ["SOX"]
clause_types = ["payment", "liability"]
fail_below = 50.0

[[catalog.regulations]]
name = "PCI"
required = ["cardholder data", "encryption", "access control", "vulnerability management"]
prohibited = ["plaintext card numbers"]
risk_indicators = ["stored cvv"]

[output]
format = "terminal"
color = true

[profiles.ci.analysis]
fail_below = 70.0

[profiles.ci.output]
format = "json"
color = false
"#;

pub const PRESET_HEALTHCARE: &str = r#"[analysis]
regulations = ["HIPAA"]
clause_types = ["confidentiality", "liability"]
fail_below = 60.0

[catalog]
disable = ["SOX", "CCPA"]

[output]
format = "terminal"
color = true

[profiles.ci.output]
format = "json"
color = false
"#;
