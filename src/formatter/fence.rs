//! Code fence selection

/// Shortest fence CommonMark allows
const MIN_FENCE_LEN: usize = 3;

/// Length of the longest run of consecutive backticks in `body`
fn longest_backtick_run(body: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in body.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Backtick fence that cannot be closed early by anything inside `body`
pub fn fence_for(body: &str) -> String {
    let len = (longest_backtick_run(body) + 1).max(MIN_FENCE_LEN);
    "`".repeat(len)
}
