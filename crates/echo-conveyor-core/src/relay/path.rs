use url::Url;

/// Path segment appended to the configured base address.
pub const PUBLISH_SEGMENT: &str = "put";

/// Join `segment` onto `base` and lexically clean the result.
///
/// Empty and `.` elements are dropped and `..` pops the previous element,
/// never past the root. The result is always rooted with no trailing slash.
pub fn join_path(base: &str, segment: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for element in base.split('/').chain(segment.split('/')) {
        match element {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

/// Publish target for a configured base address.
///
/// Scheme, host, port, query and fragment are kept; only the path changes.
/// `base` itself is left untouched.
pub fn publish_url(base: &Url) -> Url {
    let mut target = base.clone();
    target.set_path(&join_path(base.path(), PUBLISH_SEGMENT));
    target
}
