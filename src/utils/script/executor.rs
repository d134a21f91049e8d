use crate::{
	models::{MatchEnvelope, Verdict},
	utils::script::error::ScriptError,
};
use async_trait::async_trait;
use log::{debug, warn};
use std::{any::Any, io::ErrorKind, process::Stdio, time::Duration};
use tokio::{io::AsyncWriteExt, process::Command, time::timeout};

/// Upper bound on descriptors probed when counting open files
const MAX_FD_SCAN: u64 = 65_536;

/// A trait that defines the interface for executing custom scripts in different languages.
/// Implementors must be both Send and Sync to ensure thread safety.
#[async_trait]
pub trait ScriptExecutor: Send + Sync + Any {
	/// Enables downcasting by returning a reference to `Any`
	fn as_any(&self) -> &dyn Any;
	/// Executes the script with the given envelope on its stdin.
	///
	/// # Arguments
	/// * `envelope` - The match and arguments handed to the script
	/// * `timeout_ms` - Time the script may run before it is killed
	/// * `from_custom_notification` - Whether the script is a trigger, judged by exit
	///   status only
	///
	/// # Returns
	/// * `Result<bool, ScriptError>` - The verdict, or `true` for a successful trigger
	async fn execute(
		&self,
		envelope: &MatchEnvelope,
		timeout_ms: &u32,
		from_custom_notification: bool,
	) -> Result<bool, ScriptError>;
}

/// Counts the number of open file descriptors for the current process
fn count_open_fds() -> (usize, u64) {
	#[cfg(unix)]
	{
		use libc::{c_int, getrlimit, RLIMIT_NOFILE};
		use std::mem::MaybeUninit;

		let mut rlimit = MaybeUninit::uninit();
		let ret = unsafe { getrlimit(RLIMIT_NOFILE, rlimit.as_mut_ptr()) };

		if ret == 0 {
			let rlimit = unsafe { rlimit.assume_init() };
			let mut count = 0;

			// Check each potential file descriptor up to the soft limit
			for fd in 0..rlimit.rlim_cur.min(MAX_FD_SCAN) {
				let ret = unsafe { libc::fcntl(fd as c_int, libc::F_GETFD) };
				if ret != -1 {
					count += 1;
				}
			}
			(count, rlimit.rlim_cur)
		} else {
			debug!("Failed to get rlimit");
			(0, 0)
		}
	}
	#[cfg(not(unix))]
	{
		(0, 0)
	}
}

/// Spawns `command`, feeds it the envelope and interprets the outcome.
async fn run_with_envelope(
	mut command: Command,
	envelope: &MatchEnvelope,
	timeout_ms: &u32,
	from_custom_notification: bool,
) -> Result<bool, ScriptError> {
	let input_json = envelope
		.to_json()
		.map_err(|e| ScriptError::parse_error(e.to_string()))?;

	let (open_fds, max_fds) = count_open_fds();
	// Each invocation holds three pipes, so warn well before the limit is reached
	if max_fds > 0 && (open_fds as u64).saturating_mul(10) >= max_fds.saturating_mul(9) {
		warn!(
			"Number of open file descriptors ({}) is close to the maximum allowed ({}). \
			 Script invocations may start failing. You should increase the limit for open \
			 files by running:  ulimit -n <number of fds>",
			open_fds,
			max_fds
		);
	}

	let mut child = command
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.kill_on_drop(true)
		.spawn()
		.map_err(|e| match e.kind() {
			ErrorKind::NotFound => ScriptError::not_found(e.to_string()),
			_ => ScriptError::execution_error(e.to_string()),
		})?;

	let run = async move {
		// Write the envelope and close stdin so the script sees end of input
		if let Some(mut stdin) = child.stdin.take() {
			if let Err(e) = stdin.write_all(input_json.as_bytes()).await {
				// A script may exit without reading its input
				if e.kind() != ErrorKind::BrokenPipe {
					return Err(ScriptError::execution_error(e.to_string()));
				}
			}
		} else {
			return Err(ScriptError::system_error("Failed to get stdin handle"));
		}

		child
			.wait_with_output()
			.await
			.map_err(|e| ScriptError::execution_error(e.to_string()))
	};

	// Dropping the future on timeout drops the child, which kills it
	match timeout(Duration::from_millis(u64::from(*timeout_ms)), run).await {
		Ok(output) => process_script_output(output?, from_custom_notification),
		Err(_) => Err(ScriptError::timeout(*timeout_ms)),
	}
}

/// Declares an executor that hands the script source to an interpreter flag
macro_rules! interpreted_executor {
	($(#[$meta:meta])* $name:ident, $interpreter:literal, $flag:literal) => {
		$(#[$meta])*
		pub struct $name {
			/// Source of the script, read from its configured path
			pub script_content: String,
		}

		#[async_trait]
		impl ScriptExecutor for $name {
			fn as_any(&self) -> &dyn Any {
				self
			}

			async fn execute(
				&self,
				envelope: &MatchEnvelope,
				timeout_ms: &u32,
				from_custom_notification: bool,
			) -> Result<bool, ScriptError> {
				let mut command = Command::new($interpreter);
				command.arg($flag).arg(&self.script_content);
				run_with_envelope(command, envelope, timeout_ms, from_custom_notification).await
			}
		}
	};
}

interpreted_executor!(
	/// Executes Python scripts using the python3 interpreter.
	PythonScriptExecutor,
	"python3",
	"-c"
);

interpreted_executor!(
	/// Executes JavaScript scripts using the Node.js runtime.
	JavaScriptScriptExecutor,
	"node",
	"-e"
);

interpreted_executor!(
	/// Executes shell scripts with `sh`.
	BashScriptExecutor,
	"sh",
	"-c"
);

/// Executes a program directly, such as a compiled filter.
pub struct ExecutableScriptExecutor {
	/// Path of the program
	pub program: String,
	/// Arguments passed on the program's command line (not in the envelope)
	pub program_args: Vec<String>,
}

#[async_trait]
impl ScriptExecutor for ExecutableScriptExecutor {
	fn as_any(&self) -> &dyn Any {
		self
	}

	async fn execute(
		&self,
		envelope: &MatchEnvelope,
		timeout_ms: &u32,
		from_custom_notification: bool,
	) -> Result<bool, ScriptError> {
		let mut command = Command::new(&self.program);
		command.args(&self.program_args);
		run_with_envelope(command, envelope, timeout_ms, from_custom_notification).await
	}
}

/// Processes the output from script execution.
///
/// # Arguments
/// * `output` - The process output containing stdout, stderr, and status
/// * `from_custom_notification` - Whether the script is from a custom notification
/// # Returns
/// * `Result<bool, ScriptError>` - Returns parsed boolean result or error
///
/// # Errors
/// Returns an error if:
/// * The script execution was not successful (non-zero exit code)
/// * The output cannot be parsed as a boolean
/// * The script produced no output
pub fn process_script_output(
	output: std::process::Output,
	from_custom_notification: bool,
) -> Result<bool, ScriptError> {
	if !output.status.success() {
		return Err(ScriptError::execution_error(
			String::from_utf8_lossy(&output.stderr).to_string(),
		));
	}

	// A trigger reports success through its exit status alone
	if from_custom_notification {
		return Ok(true);
	}

	let stdout = String::from_utf8_lossy(&output.stdout);

	if stdout.trim().is_empty() {
		return Err(ScriptError::parse_error("Script produced no output"));
	}

	let last_line = stdout
		.lines()
		.last()
		.ok_or_else(|| ScriptError::parse_error("No output from script"))?;

	last_line
		.parse::<Verdict>()
		.map(bool::from)
		.map_err(|e| ScriptError::parse_error(format!("Invalid last line of output: {}", e)))
}
