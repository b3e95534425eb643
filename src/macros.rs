/// Unwraps an `Option`, running `$fail_body` (which must diverge) on `None`.
macro_rules! unwrap {
	($expr:expr, $fail_body:block) => {
		match $expr {
			::std::option::Option::Some(val) => val,
			::std::option::Option::None => $fail_body,
			}
	};
}

/// Unwraps a `Result`, logging the error before running `$fail_body`.
macro_rules! unwrap_or_log {
	($expr:expr, $fail_body:block) => {
		match $expr {
			::std::result::Result::Ok(val) => val,
			::std::result::Result::Err(e) => {
				::bevy::log::error!("{}", e);
				$fail_body
			},
		}
	};
}
