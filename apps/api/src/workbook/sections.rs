//! Static section definitions — the fixed grouping and ordering contract of
//! the rendered document.
//!
//! Section membership and order never vary with request content. The only
//! variable input is the configured party name, which the form embeds in the
//! impeachment-strategy field keys and two discovery/intel field keys.

/// A named group of fields rendered as one block, in declaration order.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub title: String,
    pub fields: Vec<String>,
}

/// Builds the five workbook sections for the configured party name.
/// The party name is lowercased wherever it appears inside a field key.
pub fn workbook_sections(party_name: &str) -> Vec<SectionSpec> {
    let p = party_name.to_lowercase();

    let mut strategy: Vec<String> = (1..=6).map(|n| format!("{p}_point_{n}")).collect();
    strategy.push(format!("{p}_vulnerabilities"));
    strategy.push(format!("{p}_questions"));

    let mut responses: Vec<String> = (1..=10).map(|n| format!("resp_{n}")).collect();
    responses.push("other_scenarios".to_string());

    vec![
        SectionSpec {
            title: "Meeting Objectives".to_string(),
            fields: [
                "meeting_date",
                "current_trial",
                "target_continuance",
                "min_continuance",
                "continuance_justification",
                "intel_goals",
                "walk_away",
            ]
            .map(str::to_string)
            .to_vec(),
        },
        SectionSpec {
            title: format!("{party_name} Impeachment Strategy"),
            fields: strategy,
        },
        SectionSpec {
            title: "Discovery Pressure".to_string(),
            fields: vec![
                "demand_302s".to_string(),
                "demand_brady".to_string(),
                "demand_giglio".to_string(),
                "demand_notes".to_string(),
                format!("demand_{p}_proffer"),
                format!("demand_{p}_deal"),
                "demand_warrant".to_string(),
                "demand_communications".to_string(),
                "specific_discovery".to_string(),
                "discovery_timeline".to_string(),
            ],
        },
        SectionSpec {
            title: "Government Scenarios & Responses".to_string(),
            fields: responses,
        },
        SectionSpec {
            title: "Intel & Authorization".to_string(),
            fields: vec![
                "intel_trial".to_string(),
                format!("intel_{p}"),
                "intel_discovery".to_string(),
                "intel_negotiate".to_string(),
                "location".to_string(),
                "time".to_string(),
                "ausa".to_string(),
                "client_present".to_string(),
                "client_sig".to_string(),
                "sig_date".to_string(),
            ],
        },
    ]
}
