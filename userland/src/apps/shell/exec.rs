//! Command dispatch.

use minishell_lib::{bytes_as_str, klog_trace};

use super::builtins::find_builtin;
use super::parser::parse_line;
use super::{Control, NL, Shell, UNKNOWN_CMD};

pub const STATUS_UNKNOWN: i32 = 127;

/// Run one edited line. Blank lines do nothing.
pub fn execute_line(sh: &mut Shell<'_>, line: &[u8]) -> Control {
    let Some(parsed) = parse_line(line) else {
        return Control::Continue(0);
    };

    match find_builtin(parsed.verb) {
        Some(entry) => {
            klog_trace!("exec: {}", bytes_as_str(parsed.verb));
            let args = if entry.literal_args { parsed.tail } else { parsed.args };
            (entry.func)(sh, args)
        }
        None => {
            sh.print(UNKNOWN_CMD);
            sh.print(parsed.line);
            sh.print(NL);
            Control::Continue(STATUS_UNKNOWN)
        }
    }
}
