//! Single-word heading keywords that OCR commonly splits with a space.

pub const HEADING_KEYWORDS: &[&str] = &[
    "biocompatibility",
    "biocompatible",
    "sterilization",
    "sterility",
    "cybersecurity",
    "reprocessing",
    "labeling",
    "labelling",
    "equivalence",
    "substantial",
    "predicate",
    "comparison",
    "characteristics",
    "technological",
    "indications",
    "description",
    "performance",
    "electromagnetic",
    "compatibility",
    "electrical",
    "clinical",
    "nonclinical",
    "conclusion",
    "conclusions",
    "summary",
    "software",
    "validation",
    "standards",
    "conformance",
    "shelf",
    "testing",
];

pub fn is_heading_keyword(word: &str) -> bool {
    let lower = word.to_lowercase();
    HEADING_KEYWORDS.contains(&lower.as_str())
}

/// `first second` is a keyword split in two, not two legitimate words.
pub fn is_split_keyword(first: &str, second: &str) -> bool {
    let alphabetic = |w: &str| !w.is_empty() && w.chars().all(char::is_alphabetic);
    if !alphabetic(first) || !alphabetic(second) {
        return false;
    }
    let joined = format!("{first}{second}");
    is_heading_keyword(&joined) && !(is_heading_keyword(first) && is_heading_keyword(second))
}
