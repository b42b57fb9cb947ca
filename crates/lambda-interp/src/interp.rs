//! The run loop: parse, dispatch, include resolution.

use std::fs::File;
use std::io::BufReader;

use rustc_hash::FxHashSet;

use lambda_eval::{simplify, BindingTable};
use lambda_parser::{parse_line_complete, Binding, Expr, Line};

use crate::host::{Host, StreamHost};

/// File base-names already resolved during this session. Repeat includes
/// are silent no-ops.
pub type IncludeSet = FxHashSet<String>;

/// One interpreter session over a [`Host`].
///
/// The binding table and include-set are owned exclusively by the session;
/// include sub-drivers run to completion before their results merge back,
/// so there is never more than one driver touching them.
pub struct Interpreter<H: Host> {
    host: H,
    bindings: BindingTable,
    includes: IncludeSet,
}

impl<H: Host> Interpreter<H> {
    pub fn new(host: H) -> Self {
        Self::with_seed(host, BindingTable::default(), IncludeSet::default())
    }

    /// A session seeded with an include-set but a fresh binding scope, as
    /// used for include files.
    pub fn with_includes(host: H, includes: IncludeSet) -> Self {
        Self::with_seed(host, BindingTable::default(), includes)
    }

    /// A session seeded with both bindings and includes, as used when the
    /// REPL takes over from the command-line loader.
    pub fn with_seed(host: H, bindings: BindingTable, includes: IncludeSet) -> Self {
        Self {
            host,
            bindings,
            includes,
        }
    }

    pub fn includes(&self) -> &IncludeSet {
        &self.includes
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Give the host back, for callers that need to inspect captured
    /// output after a run.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Drive the session until the input is exhausted and return a copy of
    /// the final binding table.
    pub fn run(&mut self) -> BindingTable {
        while !self.host.at_end() {
            let source = self.host.read();

            let Some(line) = parse_line_complete(&source) else {
                self.host
                    .print_error(&format!("Unable to parse: \"{source}\""));
                continue;
            };

            match line {
                Line::Comment => {}
                Line::Binding(binding) => self.install(binding),
                Line::Expr(expr) => self.evaluate(&expr),
                Line::Include(name) => self.include(&name),
            }
        }

        self.bindings.clone()
    }

    /// Install a top-level binding, warning when it shadows an existing
    /// one. The shadowing binding still takes effect.
    fn install(&mut self, binding: Binding) {
        if self.bindings.contains_key(&binding.name) {
            self.host
                .print_error(&format!("Warning: Shadowing binding `{}`", binding.name));
        }
        self.bindings.insert(binding.name, binding.value);
    }

    fn evaluate(&mut self, expr: &Expr) {
        match simplify(expr, &self.bindings) {
            Ok(value) => self.host.print(&value.to_string()),
            Err(err) => self
                .host
                .print_error(&format!("Evaluation error: {err}")),
        }
    }

    /// Resolve `#include "<name>"`: open `<name>.lambda`, run a sub-driver
    /// over it with a fresh binding scope, and merge the results back.
    fn include(&mut self, name: &str) {
        if self.includes.contains(name) {
            return;
        }

        let path = format!("{name}.lambda");
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                self.host
                    .print_error(&format!("Include Error: Failed to open file: \"{path}\""));
                return;
            }
        };

        // The included file sees the include-set (for include-once across
        // nested files) but not the current bindings.
        let sub_host = StreamHost::stdio(BufReader::new(file));
        let mut sub = Interpreter::with_includes(sub_host, self.includes.clone());
        let merged = sub.run();

        for (bound_name, value) in merged {
            if self.bindings.contains_key(&bound_name) {
                self.host.print_error(&format!(
                    "Include warning: Shadowing binding `{bound_name}` while including {name}"
                ));
            }
            self.bindings.insert(bound_name, value);
        }

        self.includes = sub.includes().clone();
        self.includes.insert(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::io::Write as _;

    /// A scripted host: feeds prepared lines, captures both channels.
    struct ScriptHost {
        lines: VecDeque<String>,
        printed: Vec<String>,
        errors: Vec<String>,
    }

    impl ScriptHost {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                printed: Vec::new(),
                errors: Vec::new(),
            }
        }
    }

    impl Host for ScriptHost {
        fn read(&mut self) -> String {
            self.lines.pop_front().unwrap_or_default()
        }

        fn print(&mut self, message: &str) {
            self.printed.push(message.to_string());
        }

        fn print_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn at_end(&mut self) -> bool {
            self.lines.is_empty()
        }
    }

    fn run_session(lines: &[&str]) -> (BindingTable, Vec<String>, Vec<String>) {
        let mut session = Interpreter::new(ScriptHost::new(lines));
        let bindings = session.run();
        let host = session.into_host();
        (bindings, host.printed, host.errors)
    }

    #[test]
    fn identity_mapping_applies() {
        let (_, printed, errors) = run_session(&["id = x -> x", "id \"hi\""]);
        assert_eq!(printed, vec!["\"hi\""]);
        assert!(errors.is_empty());
    }

    #[test]
    fn curried_constant_mapping() {
        let (_, printed, _) = run_session(&["K = x -> y -> x", "K \"a\" \"b\""]);
        assert_eq!(printed, vec!["\"a\""]);
    }

    #[test]
    fn string_concatenation_prints() {
        let (_, printed, _) = run_session(&["\"hello \" \"world\""]);
        assert_eq!(printed, vec!["\"hello world\""]);
    }

    #[test]
    fn string_applied_to_mapping_reports_evaluation_error() {
        let (_, printed, errors) = run_session(&["\"hello \" (x -> x)"]);
        assert!(printed.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Evaluation error: Left side of application expression"));
        assert!(errors[0].contains("Right side is x -> x"));
    }

    #[test]
    fn undefined_name_reports_evaluation_error() {
        let (_, _, errors) = run_session(&["undefined_name"]);
        assert_eq!(
            errors,
            vec!["Evaluation error: Cannot evaluate `undefined_name`, it is not defined."]
        );
    }

    #[test]
    fn let_and_where_lines_evaluate() {
        let (_, printed, errors) = run_session(&[
            "let f = x -> x in f \"ok\"",
            "f \"shadow\" where f = x -> x",
        ]);
        assert_eq!(printed, vec!["\"ok\"", "\"shadow\""]);
        assert!(errors.is_empty());
    }

    #[test]
    fn rebinding_warns_and_takes_effect() {
        let (bindings, _, errors) = run_session(&["foo = \"bar\"", "foo = \"baz\"", "foo"]);
        assert_eq!(errors, vec!["Warning: Shadowing binding `foo`"]);
        assert_eq!(
            bindings.get("foo"),
            Some(&Expr::String("baz".to_string()))
        );
    }

    #[test]
    fn unparseable_line_reports_and_continues() {
        let (_, printed, errors) = run_session(&["f = ) oops", "\"still\" \" here\""]);
        assert_eq!(errors, vec!["Unable to parse: \"f = ) oops\""]);
        assert_eq!(printed, vec!["\"still here\""]);
    }

    #[test]
    fn comments_and_blank_lines_are_no_ops() {
        let (bindings, printed, errors) =
            run_session(&["// a comment", "", "   ", "x = \"1\""]);
        assert!(printed.is_empty());
        assert!(errors.is_empty());
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn binding_with_where_value_is_installed_unevaluated() {
        let (bindings, printed, _) = run_session(&["f = x where x = \"hi\"", "f"]);
        assert!(matches!(bindings.get("f"), Some(Expr::Where { .. })));
        // Evaluating `f` expands the where at use time.
        assert_eq!(printed, vec!["\"hi\""]);
    }

    #[test]
    fn run_returns_a_copy_of_the_table() {
        let (bindings, _, _) = run_session(&["a = \"1\"", "b = \"2\""]);
        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains_key("a"));
        assert!(bindings.contains_key("b"));
    }

    // ── Include resolution ──────────────────────────────────────────────

    /// Write `<dir>/<name>.lambda` and return the include base-name (the
    /// path without the extension), which the driver re-appends.
    fn write_module(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(format!("{name}.lambda"));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        dir.path().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn include_merges_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_module(&dir, "m", "greeting = \"hi\"\n");

        let line = format!("#include \"{base}\"");
        let (bindings, _, errors) = run_session([line.as_str(), "greeting"].as_slice());
        assert!(errors.is_empty());
        assert!(bindings.contains_key("greeting"));
    }

    #[test]
    fn include_is_recorded_once_and_repeats_are_silent() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_module(&dir, "m", "x = \"1\"\n");

        let line = format!("#include \"{base}\"");
        let mut session = Interpreter::new(ScriptHost::new([line.as_str(), line.as_str()].as_slice()));
        session.run();
        assert_eq!(session.includes().iter().count(), 1);
        assert!(session.includes().contains(&base));
        // A second include of the same module would have warned about
        // shadowing every binding; silence means it was skipped.
        assert!(session.into_host().errors.is_empty());
    }

    #[test]
    fn include_shadowing_warns_per_collision() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_module(&dir, "m", "x = \"from file\"\n");

        let line = format!("#include \"{base}\"");
        let (bindings, _, errors) = run_session(["x = \"local\"", line.as_str()].as_slice());
        assert_eq!(
            errors,
            vec![format!(
                "Include warning: Shadowing binding `x` while including {base}"
            )]
        );
        assert_eq!(
            bindings.get("x"),
            Some(&Expr::String("from file".to_string()))
        );
    }

    #[test]
    fn include_does_not_leak_current_bindings_into_the_file() {
        let dir = tempfile::tempdir().unwrap();
        // The included file references a name only the includer defines;
        // its scope is fresh, so this is an (stderr-reported) eval error in
        // the sub-driver and no binding is produced.
        let base = write_module(&dir, "m", "y = \"ok\"\nonly_local\n");

        let line = format!("#include \"{base}\"");
        let (bindings, _, _) = run_session(["only_local = \"here\"", line.as_str()].as_slice());
        assert!(bindings.contains_key("y"));
    }

    #[test]
    fn nested_includes_propagate_the_include_set() {
        let dir = tempfile::tempdir().unwrap();
        let inner = write_module(&dir, "inner", "deep = \"v\"\n");
        let outer = write_module(
            &dir,
            "outer",
            &format!("#include \"{inner}\"\nshallow = \"w\"\n"),
        );

        let line = format!("#include \"{outer}\"");
        let mut session = Interpreter::new(ScriptHost::new([line.as_str()].as_slice()));
        let bindings = session.run();
        assert!(bindings.contains_key("deep"));
        assert!(bindings.contains_key("shallow"));
        assert!(session.includes().contains(&inner));
        assert!(session.includes().contains(&outer));
    }

    #[test]
    fn missing_include_file_reports_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("absent").to_str().unwrap().to_string();

        let line = format!("#include \"{base}\"");
        let (_, printed, errors) = run_session([line.as_str(), "\"after\" \"wards\""].as_slice());
        assert_eq!(
            errors,
            vec![format!(
                "Include Error: Failed to open file: \"{base}.lambda\""
            )]
        );
        assert_eq!(printed, vec!["\"afterwards\""]);
        // The failed include is not recorded; a later attempt may succeed.
    }

    #[test]
    fn failed_include_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("late").to_str().unwrap().to_string();
        let line = format!("#include \"{base}\"");

        let mut session = Interpreter::new(ScriptHost::new([line.as_str(), line.as_str()].as_slice()));
        session.run();
        // Both attempts failed, both reported.
        assert_eq!(session.into_host().errors.len(), 2);
    }
}
