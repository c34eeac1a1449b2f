//! Anchor.toml must name the id the program crate was compiled with.

const ANCHOR_TOML: &str = include_str!("../../Anchor.toml");

#[test]
fn test_anchor_toml_matches_declared_id() {
    let declared = token_contract::ID.to_string();

    let entry = ANCHOR_TOML
        .lines()
        .find(|line| line.trim_start().starts_with("token_contract"))
        .expect("token_contract entry in Anchor.toml");

    assert!(
        entry.contains(&declared),
        "Anchor.toml has `{}`, program declares {}; run `anchor keys sync`",
        entry.trim(),
        declared
    );
}
