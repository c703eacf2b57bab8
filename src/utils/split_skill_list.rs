use crate::constants::SKILL_LIST_DELIMITER;
use crate::types::SkillName;

/// Splits a delimited skill cell (e.g. `"React; Node.js"`) into trimmed, non-empty names.
pub fn split_skill_list(cell: &str) -> Vec<SkillName> {
    cell.split(SKILL_LIST_DELIMITER)
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
