//! Display helpers for disease labels

const HEALTHY: &str = "Great! Your plant appears healthy. Continue with regular care and monitoring.";
const CONSULT: &str = "Consult with a local agricultural expert for specific treatment recommendations.";

/// Checked in order; the first keyword found in the label wins
const TREATMENTS: &[(&str, &str)] = &[
    ("healthy", HEALTHY),
    (
        "rust",
        "Apply fungicide treatment. Remove infected leaves and improve air circulation.",
    ),
    (
        "blight",
        "Use copper-based fungicide. Avoid overhead watering and space plants properly.",
    ),
    (
        "spot",
        "Apply appropriate fungicide. Remove affected leaves and avoid water splash on leaves.",
    ),
    (
        "smut",
        "Use resistant varieties in future plantings. Apply fungicide as preventive measure.",
    ),
];

/// Treatment advice for a disease label
pub fn recommendation_for(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    TREATMENTS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(CONSULT, |(_, advice)| *advice)
}

/// Human-readable form of a raw class name
///
/// `Corn_(maize)___Common_rust_` becomes `Corn (maize) - Common rust`.
/// Labels the backend already prettified, such as `Rice -  Brown spot`,
/// get their whitespace runs collapsed.
pub fn display_label(label: &str) -> String {
    label
        .split("___")
        .map(|part| {
            part.replace('_', " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}
