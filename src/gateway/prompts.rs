//! Prompt templates and response post-processing for each tool.

pub const DEFAULT_REFINE_INSTRUCTION: &str =
    "Improve clarity, grammar, and tone while preserving meaning.";

const CHAT_PREAMBLE: &str = "You are a helpful assistant. Answer clearly and concisely.";

/// Line boundaries, matching the full set of Unicode line terminators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Characters trimmed from both ends of every idea line.
const BULLET_MARKERS: &[char] = &['-', '•', '*', ' '];

pub fn summarize(text: &str) -> String {
    format!("Summarize this text concisely:\n\n{text}")
}

pub fn generate_ideas(topic: &str) -> String {
    format!(
        "Generate 8 creative, practical ideas for the topic below. \
         Return each idea on its own line without numbering.\n\nTopic: {topic}"
    )
}

pub fn refine_content(text: &str, instruction: &str) -> String {
    format!(
        "Refine the following text according to this instruction: '{instruction}'.\n\nText:\n{text}"
    )
}

pub fn chat(input: &str) -> String {
    format!("{CHAT_PREAMBLE}\n\nUser: {input}")
}

/// Falls back to [`DEFAULT_REFINE_INSTRUCTION`] when no instruction, or an
/// empty one, was given.
pub fn resolve_instruction(instruction: Option<&str>) -> &str {
    match instruction {
        Some(instruction) if !instruction.is_empty() => instruction,
        _ => DEFAULT_REFINE_INSTRUCTION,
    }
}

/// Splits a generated list into ideas.
///
/// Blank lines are dropped; bullet markers are trimmed from the rest. A line
/// made only of markers is not blank, so it yields an empty idea.
pub fn parse_ideas(raw: &str) -> Vec<String> {
    raw.split(LINE_BREAKS)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(BULLET_MARKERS).to_string())
        .collect()
}
