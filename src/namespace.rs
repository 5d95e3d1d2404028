//! Command token tables
//!
//! Some action tokens are only prefixes (`g`, `z`, `Ctrl+w`...) that wait for
//! a second key. Each of those belongs to a namespace group, which key
//! bindings match against to route the second key.

/// Prefix tokens still waiting for their second key, with their group
const INCOMPLETE_ACTIONS: &[(&str, &str)] = &[
    ("vi_g_action", "g"),
    ("vi_gc_action", "gc"),
    ("vi_z_action", "z"),
    ("vi_z_uppercase_action", "Z"),
    ("vi_ctrl_w_action", "<C-w>"),
    ("vi_ctrl_r_action", "<C-r>"),
    ("vi_square_bracket_open_action", "["),
    ("vi_square_bracket_close_action", "]"),
];

/// Actions that finish by switching the view to insert mode
const ACTIONS_EXITING_TO_INSERT_MODE: &[&str] = &[
    "vi_c",
    "vi_s",
    "vi_big_s",
    "vi_big_c",
    "vi_big_a",
    "vi_big_i",
    "vi_change_line",
    "vi_change_to_eol",
    "vi_enter_insert_mode",
    "vi_insert_at_bol",
    "vi_append",
    "vi_append_to_eol",
    "vi_little_o",
    "vi_big_o",
];

/// Namespace group of a token, if it is a namespace prefix
pub fn resolve(token: &str) -> Option<&'static str> {
    INCOMPLETE_ACTIONS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, group)| *group)
}

/// Token is a prefix that cannot be dispatched on its own
pub fn is_incomplete(token: &str) -> bool {
    resolve(token).is_some()
}

pub fn exits_to_insert_mode(token: &str) -> bool {
    ACTIONS_EXITING_TO_INSERT_MODE.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_prefixes() {
        assert_eq!(resolve("vi_g_action"), Some("g"));
        assert_eq!(resolve("vi_ctrl_w_action"), Some("<C-w>"));
        assert_eq!(resolve("vi_z_uppercase_action"), Some("Z"));
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        assert_eq!(resolve("vi_d"), None);
        assert_eq!(resolve(""), None);
        assert!(!is_incomplete("vi_w"));
    }

    #[test]
    fn test_exits_to_insert_mode() {
        assert!(exits_to_insert_mode("vi_c"));
        assert!(exits_to_insert_mode("vi_little_o"));
        assert!(!exits_to_insert_mode("vi_d"));
        assert!(!exits_to_insert_mode("vi_g_action"));
    }

    #[test]
    fn test_groups_are_unique() {
        for (i, (_, a)) in INCOMPLETE_ACTIONS.iter().enumerate() {
            for (_, b) in &INCOMPLETE_ACTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
