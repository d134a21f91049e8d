#![no_main]

use libfuzzer_sys::fuzz_target;
use openzeppelin_monitor_scripts::services::script::{
	parse_envelope, BlockNumberParity, FilterScript,
};

fuzz_target!(|data: &[u8]| {
	let text = String::from_utf8_lossy(data);
	let _ = parse_envelope(&text);

	let mut output = Vec::new();
	if FilterScript::new(BlockNumberParity::any_chain())
		.run(data, &mut output)
		.is_ok()
	{
		assert!(output == b"true\n" || output == b"false\n");
	}
});
