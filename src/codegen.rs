//! C++ emission for the `to_tie` dispatch.
//!
//! Every case is a self-contained `if constexpr` fragment; the file chains
//! them with `else` so exactly one branch survives for any concrete aggregate.
use crate::config::GeneratorConfig;
use crate::ir::{Case, Dispatch, Overflow};
use crate::lower::{lower_case, lower_to_ir};

const INDENT: &str = "    ";

// ————————————————————————————————————————————————————————————————————————————
// PUBLIC API
// ————————————————————————————————————————————————————————————————————————————

/// Branch for aggregates with exactly `arity` fields.
pub fn produce_case(arity: u32) -> String {
    render_case(&lower_case(arity, &GeneratorConfig::default()))
}

/// Whole header for cases `0..=bound` plus the overflow branch.
pub fn produce_file(bound: u32) -> String {
    produce_file_with(bound, &GeneratorConfig::default())
}

pub fn produce_file_with(bound: u32, cfg: &GeneratorConfig) -> String {
    let dispatch = lower_to_ir(bound, cfg);
    let mut cg = Codegen::new(cfg);
    cg.emit(&dispatch);
    cg.into_string()
}

pub fn render_case(case: &Case) -> String {
    let mut s = format!("if constexpr (arity == {}) {{\n", case.arity);
    if case.is_empty() {
        s.push_str(INDENT);
        s.push_str("return std::tie();\n");
    } else {
        let members = case.bindings.join(", ");
        s.push_str(&format!("{INDENT}auto& [{members}] = t;\n"));
        s.push_str(&format!("{INDENT}return std::tie({members});\n"));
    }
    s.push('}');
    s
}

pub fn render_overflow(overflow: &Overflow) -> String {
    let threshold = overflow.threshold;
    format!(
        "if constexpr (arity >= {threshold}) {{\n{INDENT}static_assert(arity < {threshold}, \"{}\");\n}}",
        escape_cpp_string(&overflow.message),
    )
}

// ————————————————————————————————————————————————————————————————————————————
// CODEGEN
// ————————————————————————————————————————————————————————————————————————————

pub struct Codegen<'a> {
    cfg: &'a GeneratorConfig,
    out: String,
}

impl<'a> Codegen<'a> {
    pub fn new(cfg: &'a GeneratorConfig) -> Self {
        Self { cfg, out: String::new() }
    }

    pub fn emit(&mut self, dispatch: &Dispatch) {
        tracing::debug!(bound = dispatch.bound, branches = dispatch.branch_count(), "emitting dispatch");
        self.emit_prelude();

        let mut branches = Vec::with_capacity(dispatch.branch_count());
        for case in &dispatch.cases {
            tracing::trace!(arity = case.arity, "case");
            branches.push(render_case(case));
        }
        branches.push(render_overflow(&dispatch.overflow));

        let chain = branches.join(" else ");
        for line in chain.lines() {
            self.line(&format!("{INDENT}{line}"));
        }

        self.emit_epilogue();
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn emit_prelude(&mut self) {
        let cfg = self.cfg;
        self.line("#pragma once");
        self.line(&format!("#include \"{}\"", cfg.arity_header));
        self.line("");
        self.line(&format!("namespace {} {{", cfg.namespace));
        self.line(&format!("template <typename T, std::size_t arity = {}>", cfg.arity_expr));
        self.line(&format!("constexpr auto {}(T &t) {{", cfg.function_name));
    }

    fn emit_epilogue(&mut self) {
        self.line("}");
        self.line(&format!("}} // namespace {}", self.cfg.namespace));
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn escape_cpp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
