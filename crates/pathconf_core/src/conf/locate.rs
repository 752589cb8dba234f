use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Find the first existing regular file named by `file_names` in
/// `search_paths`.
///
/// File names are tried in order, each against every directory in order.
/// Leading whitespace is ignored on both; blank names are skipped. A
/// directory starting with `~` is taken relative to the home directory.
pub fn locate<D, N>(search_paths: &[D], file_names: &[N]) -> Option<PathBuf>
where
	D: AsRef<str>,
	N: AsRef<str>,
{
	for name in file_names {
		let name = name.as_ref().trim_start();
		if name.is_empty() {
			continue;
		}

		for dir in search_paths {
			let Some(dir) = expand_home(dir.as_ref().trim_start()) else {
				continue;
			};
			let candidate = dir.join(name);
			trace!(candidate = %candidate.display(), "probing");
			if candidate.is_file() {
				debug!(path = %candidate.display(), "configuration file found");
				return Some(candidate);
			}
		}
	}

	None
}

fn expand_home(dir: &str) -> Option<PathBuf> {
	let Some(rest) = dir.strip_prefix('~') else {
		return Some(PathBuf::from(dir));
	};

	let Some(home) = dirs::home_dir() else {
		debug!(dir, "no home directory, skipping");
		return None;
	};
	let rest = rest.trim_start_matches('/');
	if rest.is_empty() { Some(home) } else { Some(home.join(Path::new(rest))) }
}
