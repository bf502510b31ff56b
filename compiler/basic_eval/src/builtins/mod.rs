//! The built-in function library.
//!
//! Every builtin has a fixed parameter list. The interpreter checks the
//! argument count, binds the arguments by parameter name in a child of the
//! global scope and hands that scope to the handler.

mod io;
mod list;
mod script;
mod types;

use crate::value::Builtin;

/// Every builtin, in the order they are bound into the global scope.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "print",
        params: &["value"],
        handler: io::print,
    },
    Builtin {
        name: "print_ret",
        params: &["value"],
        handler: io::print_ret,
    },
    Builtin {
        name: "input",
        params: &[],
        handler: io::input,
    },
    Builtin {
        name: "input_int",
        params: &[],
        handler: io::input_int,
    },
    Builtin {
        name: "clear",
        params: &[],
        handler: io::clear,
    },
    Builtin {
        name: "is_number",
        params: &["value"],
        handler: types::is_number,
    },
    Builtin {
        name: "is_string",
        params: &["value"],
        handler: types::is_string,
    },
    Builtin {
        name: "is_list",
        params: &["value"],
        handler: types::is_list,
    },
    Builtin {
        name: "is_function",
        params: &["value"],
        handler: types::is_function,
    },
    Builtin {
        name: "append",
        params: &["list", "value"],
        handler: list::append,
    },
    Builtin {
        name: "pop",
        params: &["list", "index"],
        handler: list::pop,
    },
    Builtin {
        name: "extend",
        params: &["listA", "listB"],
        handler: list::extend,
    },
    Builtin {
        name: "len",
        params: &["list"],
        handler: list::len,
    },
    Builtin {
        name: "run",
        params: &["fn"],
        handler: script::run,
    },
];

/// Look up a builtin by name.
pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}
