use std::io::{self, BufRead, Write as _};

/// Collect a query interactively: the terminal stand-in for the query modal.
///
/// The default query is shown up front; the user types a multi-line query and
/// submits it with a line containing only `.`. Submitting with no lines
/// entered returns the default. EOF before the terminator is a dismissal and
/// yields `None` — the caller must not run the query.
pub fn collect(default: &str) -> io::Result<Option<String>> {
    let mut err = io::stderr().lock();
    writeln!(
        err,
        "Enter Dataview query (finish with a single \".\" line, Ctrl-D cancels):"
    )?;
    writeln!(err, "[default: {default}]")?;
    err.flush()?;
    collect_from(io::stdin().lock(), default)
}

fn collect_from<R: BufRead>(reader: R, default: &str) -> io::Result<Option<String>> {
    let mut entered = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line == "." {
            let query = if entered.is_empty() {
                default.to_string()
            } else {
                entered.join("\n")
            };
            return Ok(Some(query));
        }
        entered.push(line);
    }
    Ok(None)
}
