mod common;

use genvert_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;
use serde_json::json;

#[test]
fn encode_prints_tokens() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "0", "1", "61", "62", "63"])
		.assert()
		.success()
		.stdout("0\t\n1\tb\n61\t9\n62\tab\n63\tbb\n");

	Ok(())
}

#[test]
fn encode_truncates_large_values() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "218340105584901"])
		.assert()
		.success()
		.stdout("218340105584901\tfaaaaaaa\n");

	Ok(())
}

#[test]
fn encode_accepts_values_above_i64_max() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "9223372036854775808", "18446744073709551615"])
		.assert()
		.success()
		.stdout("9223372036854775808\tiWifIaXi\n18446744073709551615\tpIrkgbKr\n");

	Ok(())
}

#[test]
fn encode_rejects_values_above_u64_max() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "18446744073709551616"])
		.assert()
		.code(2)
		.stdout(predicates::str::is_empty())
		.stderr(predicates::str::contains("genvert::invalid_input"));

	Ok(())
}

#[test]
fn encode_json_output() -> AnyEmptyResult {
	let output = common::genvert_cmd()
		.args(["encode", "--format", "json", "5", "63"])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let value: Value = serde_json::from_slice(&output)?;
	assert_eq!(
		value,
		json!([
			{ "value": 5, "token": "f" },
			{ "value": 63, "token": "bb" },
		])
	);

	Ok(())
}

#[test]
fn encode_rejects_negative_values() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "3", "-1"])
		.assert()
		.code(2)
		.stdout(predicates::str::is_empty())
		.stderr(
			predicates::str::contains("cannot encode -1: value must be between 0 and 18446744073709551615")
				.and(predicates::str::contains("genvert::invalid_input")),
		);

	Ok(())
}

#[test]
fn encode_rejects_non_numeric_values() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["encode", "twelve"])
		.assert()
		.failure()
		.stdout(predicates::str::is_empty());

	Ok(())
}

#[test]
fn decode_prints_values() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["decode", "b", "bb", "99", "faaaaaaa"])
		.assert()
		.success()
		.stdout("b\t1\nbb\t63\n99\t3843\nfaaaaaaa\t5\n");

	Ok(())
}

#[test]
fn decode_json_output() -> AnyEmptyResult {
	let output = common::genvert_cmd()
		.args(["decode", "--format", "json", "u"])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let value: Value = serde_json::from_slice(&output)?;
	assert_eq!(value, json!([{ "token": "u", "value": 20 }]));

	Ok(())
}

#[test]
fn decode_rejects_unknown_symbols() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["decode", "a_b"])
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unknown symbol `_` at position 1"));

	Ok(())
}

#[test]
fn decode_rejects_trailing_zero_symbol() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["decode", "ba"])
		.assert()
		.code(2)
		.stdout(predicates::str::is_empty())
		.stderr(predicates::str::contains("token `ba` ends in the zero symbol `a`"));

	Ok(())
}

#[test]
fn decode_rejects_long_tokens() -> AnyEmptyResult {
	common::genvert_cmd()
		.args(["decode", "abcdefghi"])
		.assert()
		.code(2)
		.stderr(predicates::str::contains("token is 9 symbols long"));

	Ok(())
}
