//! Flag merge — base flags + overrides → effective flag list.

use indexmap::IndexSet;

/// Merge `additional` on top of `args`.
///
/// Tokens are folded left in order:
/// - `--no-x` removes `--x`
/// - a token without `=` removes its `--no-` counterpart
/// - a value-bearing token (`--x=v`) removes nothing
///
/// Re-adding a token that is still present keeps its first position; a token
/// that was removed and added again goes to the end.
pub fn append_args<A, B>(args: &[A], additional: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let all = args
        .iter()
        .map(AsRef::as_ref)
        .chain(additional.iter().map(AsRef::as_ref));

    let mut effective: IndexSet<String> = IndexSet::new();

    for arg in all {
        if let Some(name) = arg.strip_prefix("--no-") {
            effective.shift_remove(&format!("--{}", name));
        } else if !arg.contains('=') {
            let name: String = arg.chars().skip(2).collect();
            effective.shift_remove(&format!("--no-{}", name));
        }

        effective.insert(arg.to_string());
    }

    effective.into_iter().collect()
}
