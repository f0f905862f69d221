//! Property-based tests for the opcode dispatcher.
//!
//! These tests verify invariants that hold for every input word:
//! - Decoding never panics and always yields a table variant.
//! - Only bit 30, funct3 and the opcode influence the result.
//! - Deterministic decoding (same input → same output).

use proptest::prelude::*;

use rv32i_decoder::isa::instruction::extract;
use rv32i_decoder::isa::{Dialect, Mnemonic, decode, decode_fields, decode_with, display};

use crate::common::InstructionBuilder;
use crate::common::builder::CLASSIFICATION_MASK;

/// Major opcodes that have at least one table entry.
const RECOGNISED: [u8; 9] = [0x03, 0x13, 0x17, 0x23, 0x33, 0x37, 0x63, 0x67, 0x6F];

fn any_dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![Just(Dialect::Standard), Just(Dialect::Legacy)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Every word decodes to a variant that has a table row.
    #[test]
    fn decode_is_total(word in any::<u32>(), dialect in any_dialect()) {
        let mnemonic = decode_with(word, dialect);
        prop_assert!(Mnemonic::ALL.contains(&mnemonic));
        prop_assert_eq!(display(mnemonic).mnemonic, mnemonic);
    }

    /// Flipping any bit outside {30, 14..12, 6..0} never changes the result.
    #[test]
    fn decode_ignores_non_classification_bits(
        word in any::<u32>(),
        noise in any::<u32>(),
        dialect in any_dialect(),
    ) {
        let other = word ^ (noise & !CLASSIFICATION_MASK);
        prop_assert_eq!(decode_with(word, dialect), decode_with(other, dialect));
    }

    /// A word built from a field triple decodes like the triple itself.
    #[test]
    fn decode_depends_only_on_fields(
        opcode in 0u8..0x80,
        funct3 in 0u8..8,
        bit30 in 0u8..2,
        noise_a in any::<u32>(),
        noise_b in any::<u32>(),
    ) {
        let base = InstructionBuilder::new().opcode(opcode).funct3(funct3).bit30(bit30);
        let a = base.noise(noise_a).build();
        let b = base.noise(noise_b).build();
        prop_assert_eq!(decode(a), decode(b));
        prop_assert_eq!(decode(a), decode_fields(extract(b), Dialect::Standard));
    }

    /// Repeated calls agree.
    #[test]
    fn decode_is_deterministic(word in any::<u32>()) {
        let first = decode(word);
        for _ in 0..4 {
            prop_assert_eq!(decode(word), first);
        }
    }

    /// `decode` is the standard dialect.
    #[test]
    fn decode_is_standard_dialect(word in any::<u32>()) {
        prop_assert_eq!(decode(word), decode_with(word, Dialect::Standard));
    }

    /// Unused opcodes are always Unknown whatever the other fields hold.
    #[test]
    fn unrecognised_opcodes_are_unknown(
        opcode in (0u8..0x80).prop_filter("recognised opcode", |op| !RECOGNISED.contains(op)),
        noise in any::<u32>(),
        dialect in any_dialect(),
    ) {
        let word = (noise & !0x7F) | u32::from(opcode);
        prop_assert_eq!(decode_with(word, dialect), Mnemonic::Unknown);
    }
}

#[test]
fn decode_field_locality_for_every_table_triple() {
    // Every non-classification bit (31, 29..15, 11..7), then alternating ones.
    let patterns = [0xBFFF_8F80u32, 0x2AAA_8A80];
    for opcode in 0..=0x7Fu8 {
        for funct3 in 0..=7u8 {
            for bit30 in 0..=1u8 {
                let base = InstructionBuilder::new().opcode(opcode).funct3(funct3).bit30(bit30);
                let plain = decode(base.build());
                for noise in patterns {
                    assert_eq!(decode(base.noise(noise).build()), plain);
                }
            }
        }
    }
}

#[test]
fn decode_is_callable_from_many_threads() {
    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            std::thread::spawn(move || {
                (0..4096u32)
                    .map(|i| decode(i.wrapping_mul(0x9E37_79B9) ^ t))
                    .filter(|m| !m.is_unknown())
                    .count()
            })
        })
        .collect();
    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_default())
        .collect();
    let serial: Vec<usize> = (0..4u32)
        .map(|t| {
            (0..4096u32)
                .map(|i| decode(i.wrapping_mul(0x9E37_79B9) ^ t))
                .filter(|m| !m.is_unknown())
                .count()
        })
        .collect();
    assert_eq!(counts, serial);
}
