//! Pre-filtering of the argument vector.
//!
//! Unrecognized flags are ignored rather than rejected, so they are removed
//! here before clap sees the arguments. Everything after `--` is passed
//! through untouched.

use std::ffi::OsString;

/// Short flags that take no value.
const SHORT_SWITCHES: &[char] = &['b', 'c', 'd', 'f', 'h', 's', 'w', 'x', 'V'];

/// Short flags that take a value, attached or as the next argument.
const SHORT_OPTIONS: &[char] = &['e', 'p'];

/// Long flags that take no value.
const LONG_SWITCHES: &[&str] = &[
    "bourne",
    "csh",
    "windows",
    "duplicates",
    "front",
    "source",
    "check-exists",
    "verbose",
    "quiet",
    "help",
    "version",
];

/// Long flags that take a value, after `=` or as the next argument.
const LONG_OPTIONS: &[&str] = &["if-set", "path-var"];

/// Drop every flag clap would not recognize.
///
/// The first argument (the program name) is always kept. A value-taking
/// flag with no value left is dropped too.
///
/// # Examples
///
/// ```
/// use addpath_cli::args::retain_known_flags;
///
/// let args = retain_known_flags(["addpath", "-qf", "--color", "--front=1", "/a"].map(Into::into));
/// assert_eq!(args, ["addpath", "-f", "/a"]);
/// ```
pub fn retain_known_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            kept.push(arg);
            continue;
        };

        if text == "--" {
            kept.push(arg);
            kept.extend(args.by_ref());
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            let name = long.split_once('=').map_or(long, |(name, _)| name);
            if LONG_SWITCHES.contains(&name) {
                // Switches take no value, so `--front=yes` is unknown.
                if !long.contains('=') {
                    kept.push(arg.clone());
                }
            } else if LONG_OPTIONS.contains(&name) {
                if long.contains('=') {
                    kept.push(arg.clone());
                } else if let Some(value) = args.next() {
                    kept.push(arg.clone());
                    kept.push(value);
                }
            }
            continue;
        }

        if let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) {
            let (flags, value) = filter_cluster(cluster);
            match value {
                ClusterValue::None => {
                    if flags.len() > 1 {
                        kept.push(flags.into());
                    }
                }
                ClusterValue::Attached => kept.push(flags.into()),
                ClusterValue::Next => {
                    if let Some(value) = args.next() {
                        kept.push(flags.into());
                        kept.push(value);
                    } else if flags.len() > 2 {
                        // Keep the switches before the dangling option.
                        kept.push(flags[..flags.len() - 1].to_string().into());
                    }
                }
            }
            continue;
        }

        kept.push(arg);
    }

    kept
}

/// Where the value of a value-taking short flag comes from.
enum ClusterValue {
    /// No value-taking flag in the cluster.
    None,
    /// The value is the remainder of the cluster.
    Attached,
    /// The value is the next argument.
    Next,
}

/// Keep the known flags of a short-flag cluster, returned with a leading `-`.
fn filter_cluster(cluster: &str) -> (String, ClusterValue) {
    let mut flags = String::from("-");

    for (i, c) in cluster.char_indices() {
        if SHORT_SWITCHES.contains(&c) {
            flags.push(c);
        } else if SHORT_OPTIONS.contains(&c) {
            flags.push(c);
            let rest = &cluster[i + c.len_utf8()..];
            if rest.is_empty() {
                return (flags, ClusterValue::Next);
            }
            flags.push_str(rest);
            return (flags, ClusterValue::Attached);
        }
    }

    (flags, ClusterValue::None)
}
