//! Mnemonic Display Table Tests.
//!
//! Verifies row order, canonical names, the attention-styled subset, and
//! the legacy display text.

use rstest::rstest;

use rv32i_decoder::isa::mnemonic::table;
use rv32i_decoder::isa::{Mnemonic, StyleTag, display};

#[test]
fn table_has_one_row_per_variant() {
    // Unknown plus 37 operations.
    assert_eq!(Mnemonic::COUNT, 38);
    assert_eq!(Mnemonic::And.index() + 1, Mnemonic::COUNT);
    assert_eq!(table().len(), Mnemonic::COUNT);
    assert_eq!(Mnemonic::ALL.len(), Mnemonic::COUNT);
}

#[test]
fn table_rows_follow_discriminant_order() {
    for (i, (row, variant)) in table().iter().zip(Mnemonic::ALL).enumerate() {
        assert_eq!(row.mnemonic, variant, "row {i}");
        assert_eq!(variant.index(), i);
        assert_eq!(display(variant), row);
    }
}

#[test]
fn display_names_are_unique_and_upper_case() {
    let mut names: Vec<&str> = table().iter().map(|row| row.display_name).collect();
    for name in &names {
        assert!(!name.is_empty());
        assert_eq!(name.to_ascii_uppercase(), *name);
    }
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Mnemonic::COUNT);
}

#[test]
fn exactly_branches_and_unknown_are_flagged() {
    let flagged: Vec<Mnemonic> = table()
        .iter()
        .filter(|row| row.style_tag == Some(StyleTag::Attention))
        .map(|row| row.mnemonic)
        .collect();
    assert_eq!(
        flagged,
        vec![
            Mnemonic::Unknown,
            Mnemonic::Beq,
            Mnemonic::Bne,
            Mnemonic::Blt,
            Mnemonic::Bge,
            Mnemonic::Bltu,
            Mnemonic::Bgeu,
        ]
    );
}

#[test]
fn only_beq_has_a_legacy_spelling() {
    let respelled: Vec<(Mnemonic, &str)> = table()
        .iter()
        .filter_map(|row| row.legacy_spelling.map(|s| (row.mnemonic, s)))
        .collect();
    assert_eq!(respelled, vec![(Mnemonic::Beq, "BEG")]);
    assert_eq!(Mnemonic::Beq.name(), "BEQ");
}

#[rstest]
#[case::unknown(Mnemonic::Unknown, "UNKN", "?red?UNKN")]
#[case::beq(Mnemonic::Beq, "BEQ", "?red?BEG")]
#[case::bne(Mnemonic::Bne, "BNE", "?red?BNE")]
#[case::bgeu(Mnemonic::Bgeu, "BGEU", "?red?BGEU")]
#[case::lui(Mnemonic::Lui, "LUI", "LUI")]
#[case::srai(Mnemonic::Srai, "SRAI", "SRAI")]
#[case::and(Mnemonic::And, "AND", "AND")]
fn names_and_legacy_text(
    #[case] mnemonic: Mnemonic,
    #[case] name: &str,
    #[case] legacy: &str,
) {
    let entry = display(mnemonic);
    assert_eq!(entry.display_name, name);
    assert_eq!(mnemonic.name(), name);
    assert_eq!(mnemonic.to_string(), name);
    assert_eq!(entry.legacy_text(), legacy);
}

#[test]
fn style_marker_text() {
    assert_eq!(StyleTag::Attention.marker(), "?red?");
    assert_eq!(Mnemonic::Blt.style_tag(), Some(StyleTag::Attention));
    assert_eq!(Mnemonic::Jal.style_tag(), None);
}

#[test]
fn unknown_is_the_default_variant() {
    assert_eq!(Mnemonic::default(), Mnemonic::Unknown);
    assert!(Mnemonic::Unknown.is_unknown());
    assert!(!Mnemonic::Addi.is_unknown());
    assert_eq!(Mnemonic::Unknown.index(), 0);
}
