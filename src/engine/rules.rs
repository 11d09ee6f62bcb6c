use crate::domain::RiskTier;

pub struct RegulationDef {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub prohibited: &'static [&'static str],
    pub risk_indicators: &'static [&'static str],
}

pub struct ClauseDef {
    pub clause_type: &'static str,
    pub patterns: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub struct RiskBucketDef {
    pub tier: RiskTier,
    pub terms: &'static [&'static str],
}

pub static REGULATIONS: &[RegulationDef] = &[
    RegulationDef {
        name: "GDPR",
        required: &[
            "data protection",
            "personal data",
            "data subject rights",
            "consent",
            "data processor",
            "data controller",
        ],
        prohibited: &["unlimited data retention", "no data subject rights"],
        risk_indicators: &["automatic data processing", "profiling", "sensitive data"],
    },
    RegulationDef {
        name: "CCPA",
        required: &[
            "california consumer privacy act",
            "personal information",
            "consumer rights",
            "opt-out",
            "data deletion",
        ],
        prohibited: &["no consumer rights", "mandatory data sharing"],
        risk_indicators: &["sale of personal information", "third-party sharing"],
    },
    RegulationDef {
        name: "SOX",
        required: &[
            "financial disclosure",
            "internal controls",
            "audit",
            "financial reporting",
            "compliance certification",
        ],
        prohibited: &["no financial oversight", "unrestricted access"],
        risk_indicators: &["related party transactions", "off-balance sheet"],
    },
    RegulationDef {
        name: "HIPAA",
        required: &[
            "protected health information",
            "phi",
            "business associate",
            "minimum necessary",
            "security safeguards",
        ],
        prohibited: &["unrestricted phi access", "no security measures"],
        risk_indicators: &["phi disclosure", "unsecured transmission"],
    },
];

pub static CLAUSES: &[ClauseDef] = &[
    ClauseDef {
        clause_type: "termination",
        patterns: &[
            r"terminat\w+",
            r"end\s+(?:this\s+)?agreement",
            r"expir\w+",
            r"dissolv\w+",
            r"breach.*terminat\w+",
        ],
        keywords: &["terminate", "termination", "end", "expire", "dissolution"],
    },
    ClauseDef {
        clause_type: "liability",
        patterns: &[
            r"liabilit\w+",
            r"liable\s+for",
            r"damages",
            r"indemnif\w+",
            r"limitation\s+of\s+liability",
        ],
        keywords: &["liability", "liable", "damages", "indemnify", "limitation"],
    },
    ClauseDef {
        clause_type: "payment",
        patterns: &[
            r"payment\s+terms",
            r"invoice\w*",
            r"fee\s+schedule",
            r"compensation",
            r"\$[\d,]+(?:\.\d{2})?",
        ],
        keywords: &["payment", "invoice", "fee", "compensation", "cost"],
    },
    ClauseDef {
        clause_type: "confidentiality",
        patterns: &[
            r"confidential\w*",
            r"non.?disclosure",
            r"proprietary\s+information",
            r"trade\s+secret\w*",
            r"confidentiality\s+agreement",
        ],
        keywords: &["confidential", "non-disclosure", "proprietary", "trade secret"],
    },
    ClauseDef {
        clause_type: "intellectual_property",
        patterns: &[
            r"intellectual\s+property",
            r"copyright\w*",
            r"trademark\w*",
            r"patent\w*",
            r"trade\s+secret\w*",
        ],
        keywords: &["intellectual property", "copyright", "trademark", "patent"],
    },
    ClauseDef {
        clause_type: "dispute_resolution",
        patterns: &[
            r"dispute\s+resolution",
            r"arbitration",
            r"mediation",
            r"governing\s+law",
            r"jurisdiction",
        ],
        keywords: &["dispute", "arbitration", "mediation", "governing law"],
    },
    ClauseDef {
        clause_type: "force_majeure",
        patterns: &[
            r"force\s+majeure",
            r"act\s+of\s+god",
            r"unforeseeable\s+circumstances",
            r"beyond\s+reasonable\s+control",
        ],
        keywords: &["force majeure", "act of god", "unforeseeable"],
    },
];

pub static RISK_BUCKETS: &[RiskBucketDef] = &[
    RiskBucketDef {
        tier: RiskTier::HighRisk,
        terms: &[
            "unlimited liability",
            "personal guarantee",
            "liquidated damages",
            "automatic renewal",
            "non-compete",
            "exclusive dealing",
            "penalty clause",
            "forfeiture",
        ],
    },
    RiskBucketDef {
        tier: RiskTier::MediumRisk,
        terms: &[
            "indemnification",
            "force majeure",
            "intellectual property",
            "confidentiality breach",
            "termination for convenience",
            "governing law",
            "arbitration mandatory",
        ],
    },
    RiskBucketDef {
        tier: RiskTier::LowRisk,
        terms: &[
            "standard warranty",
            "mutual agreement",
            "reasonable notice",
            "good faith",
            "best efforts",
            "industry standard",
        ],
    },
];
