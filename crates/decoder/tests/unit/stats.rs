//! Decode Statistics Tests.

use pretty_assertions::assert_eq;

use rv32i_decoder::Mnemonic;
use rv32i_decoder::common::HexToken;
use rv32i_decoder::stats::DecodeStats;

fn sample() -> DecodeStats {
    let mut stats = DecodeStats::default();
    stats.record(HexToken::Exact(0x13), Mnemonic::Addi);
    stats.record(HexToken::Exact(0x13), Mnemonic::Addi);
    stats.record(HexToken::Partial { word: 0x63, consumed: 2 }, Mnemonic::Beq);
    stats.record(HexToken::Invalid, Mnemonic::Unknown);
    stats
}

#[test]
fn default_is_empty() {
    let stats = DecodeStats::default();
    assert_eq!(stats.tokens, 0);
    assert_eq!(stats.unknown(), 0);
    assert_eq!(stats.mix().count(), 0);
}

#[test]
fn record_updates_quality_counters() {
    let stats = sample();
    assert_eq!(stats.tokens, 4);
    assert_eq!(stats.exact_tokens, 2);
    assert_eq!(stats.partial_tokens, 1);
    assert_eq!(stats.invalid_tokens, 1);
}

#[test]
fn record_updates_histogram() {
    let stats = sample();
    assert_eq!(stats.count(Mnemonic::Addi), 2);
    assert_eq!(stats.count(Mnemonic::Beq), 1);
    assert_eq!(stats.count(Mnemonic::Sub), 0);
    assert_eq!(stats.unknown(), 1);
}

#[test]
fn mix_lists_non_zero_rows_in_table_order() {
    let mix: Vec<(Mnemonic, u64)> = sample().mix().collect();
    assert_eq!(
        mix,
        vec![(Mnemonic::Unknown, 1), (Mnemonic::Beq, 1), (Mnemonic::Addi, 2)]
    );
}

#[test]
fn summary_format() {
    let expected = "\
decode.tokens            4
decode.exact             2
decode.partial           1 (25.00%)
decode.invalid           1 (25.00%)
decode.unknown           1 (25.00%)
  mix.UNKN                1 (25.00%)
  mix.BEQ                 1 (25.00%)
  mix.ADDI                2 (50.00%)
";
    assert_eq!(sample().to_string(), expected);
}

#[test]
fn summary_of_empty_run_has_no_mix() {
    let text = DecodeStats::default().to_string();
    assert!(text.contains("decode.unknown           0 (0.00%)"));
    assert!(!text.contains("mix."));
}
