use mdstore::Result;
use std::io::{self, Write};

pub fn prompt(msg: &str) -> Result<String> {
	print!("{}", msg);
	io::stdout().flush()?;

	let mut buff: String = String::new();
	io::stdin().read_line(&mut buff)?;
	let buff = buff.trim();

	Ok(buff.to_string())
}

/// Only an explicit yes confirms, an empty answer does not.
pub fn is_yes(answer: &str) -> bool {
	matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES")
}
