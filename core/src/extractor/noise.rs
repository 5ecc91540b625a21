/// Button and option captions the PDF dump interleaves with real labels.
const UI_WORDS: [&str; 8] = [
    "Yes", "No", "Male", "Female", "Other", "Clear", "Save", "Submit",
];

/// True for text that can never be (part of) a field label: blanks, page
/// footers like `-- 3 of 9 --`, and bare UI captions.
pub fn is_noise(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return true;
    }
    if is_page_marker(s) {
        return true;
    }
    UI_WORDS.contains(&s)
}

fn is_page_marker(trimmed: &str) -> bool {
    trimmed.starts_with("-- ") && trimmed.contains(" of ")
}
