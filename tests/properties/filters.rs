use crate::properties::strategies::{args_strategy, hex_quantity_strategy, sequence_strategy};
use openzeppelin_monitor_scripts::{
	models::{BlockChainType, Verdict},
	services::script::{
		ArgumentMembership, BlockNumberParity, FilterPredicate, FilterScript,
	},
};
use proptest::{prelude::*, test_runner::Config};
use serde_json::json;

fn run<P: FilterPredicate>(script: &FilterScript<P>, input: &[u8]) -> String {
	let mut output = Vec::new();
	script.run(input, &mut output).unwrap();
	String::from_utf8(output).unwrap()
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_evm_parity_matches_number((number, quantity) in hex_quantity_strategy()) {
		let input = json!({
			"monitor_match": {"EVM": {"transaction": {"blockNumber": quantity}}},
			"args": []
		})
		.to_string();

		for script in [
			FilterScript::new(BlockNumberParity::for_chain(BlockChainType::EVM)),
			FilterScript::new(BlockNumberParity::any_chain()),
		] {
			prop_assert_eq!(script.decide(input.as_bytes()), Verdict::from(number % 2 == 0));
		}
	}

	#[test]
	fn test_stellar_parity_matches_number((number, sequence) in sequence_strategy()) {
		let input = json!({
			"monitor_match": {"Stellar": {"ledger": {"sequence": sequence}}},
			"args": null
		})
		.to_string();

		let script = FilterScript::new(BlockNumberParity::for_chain(BlockChainType::Stellar));
		prop_assert_eq!(script.decide(input.as_bytes()), Verdict::from(number % 2 == 0));

		let evm_only = FilterScript::new(BlockNumberParity::for_chain(BlockChainType::EVM));
		prop_assert_eq!(evm_only.decide(input.as_bytes()), Verdict::FALSE);
	}

	#[test]
	fn test_membership_matches_contains(args in args_strategy(), token in "--[a-z]{1,8}") {
		let input = json!({"monitor_match": {}, "args": args}).to_string();
		let script = FilterScript::new(ArgumentMembership::new(token.clone()));

		prop_assert_eq!(
			script.decide(input.as_bytes()),
			Verdict::from(args.contains(&token))
		);
	}

	#[test]
	fn test_arbitrary_input_yields_one_verdict_line(input in prop::collection::vec(any::<u8>(), 0..256)) {
		let script = FilterScript::new(BlockNumberParity::any_chain());
		let output = run(&script, &input);
		prop_assert!(output == "true\n" || output == "false\n");
	}

	#[test]
	fn test_arbitrary_json_yields_one_verdict_line(input in "\\{[\"a-zA-Z0-9:,\\[\\]{} ]{0,64}\\}") {
		let script = FilterScript::new(ArgumentMembership::default());
		let output = run(&script, input.as_bytes());
		prop_assert!(output == "true\n" || output == "false\n");
	}

	#[test]
	fn test_same_input_same_verdict((_, quantity) in hex_quantity_strategy(), args in args_strategy()) {
		let input = json!({
			"monitor_match": {"EVM": {"transaction": {"blockNumber": quantity}}},
			"args": args
		})
		.to_string();

		let parity = FilterScript::new(BlockNumberParity::any_chain());
		prop_assert_eq!(run(&parity, input.as_bytes()), run(&parity, input.as_bytes()));

		let membership = FilterScript::new(ArgumentMembership::default());
		prop_assert_eq!(run(&membership, input.as_bytes()), run(&membership, input.as_bytes()));
	}
}
