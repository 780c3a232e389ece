/// ASCII-only variant of `str::to_lowercase` used for emoji codes.
///
/// Returns `None` if `input` holds no `A-Z` at all, so callers can skip a
/// second table lookup without allocating. Only ever allocates once.
///
/// Multi-byte UTF-8 sequences are left untouched: both lead and
/// continuation bytes are `>= 0x80` and can never be mistaken for
/// an ASCII uppercase letter.
pub fn fold(input: &str) -> Option<String> {
	let first = input.bytes().position(|b| b.is_ascii_uppercase())?;

	let mut out = input.to_owned();
	// only ASCII bytes are touched, the string stays valid UTF-8
	out[first..].make_ascii_lowercase();

	Some(out)
}
