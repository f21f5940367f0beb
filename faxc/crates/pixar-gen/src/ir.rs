//! PixIR instructions and their textual rendering (§6: one instruction
//! per line, labels on their own line, integers decimal, colours
//! `#RRGGBB`, strings as comma-separated decimal code points).

use pixar_lex::Colour;
use pixar_util::Symbol;

use crate::label::Label;

#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    PushInt(i64),
    PushFloat(f64),
    PushBool(bool),
    PushColour(Colour),
    PushString(Symbol),

    Ld,
    St,

    OFrame(u32),
    CFrame,

    Add,
    Sub,
    Mul,
    Div,
    Mod,

    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Neq,

    And,
    Or,
    Not,

    Jmp(Label),
    CJmp(Label),

    Call(Symbol, u32),
    Ret,

    Print,
    Delay,
    Read,
    Pixel,
    PixelR,
    Width,
    Height,
    Irnd,

    Label(Label),
}

impl Instr {
    /// Renders one PixIR text line. Labels render bare (`.L0`); every
    /// other instruction renders as `mnemonic operand operand...`.
    pub fn to_line(&self) -> String {
        match self {
            Instr::PushInt(v) => format!("push {v}"),
            Instr::PushFloat(v) => format!("push {v}"),
            Instr::PushBool(v) => format!("push {}", if *v { 1 } else { 0 }),
            Instr::PushColour(c) => format!("push {c}"),
            Instr::PushString(s) => format!("push \"{}\"", encode_string(s.as_str())),

            Instr::Ld => "ld".to_string(),
            Instr::St => "st".to_string(),

            Instr::OFrame(size) => format!("oframe {size}"),
            Instr::CFrame => "cframe".to_string(),

            Instr::Add => "add".to_string(),
            Instr::Sub => "sub".to_string(),
            Instr::Mul => "mul".to_string(),
            Instr::Div => "div".to_string(),
            Instr::Mod => "mod".to_string(),

            Instr::Lt => "lt".to_string(),
            Instr::Le => "le".to_string(),
            Instr::Gt => "gt".to_string(),
            Instr::Ge => "ge".to_string(),
            Instr::Eq => "eq".to_string(),
            Instr::Neq => "neq".to_string(),

            Instr::And => "and".to_string(),
            Instr::Or => "or".to_string(),
            Instr::Not => "not".to_string(),

            Instr::Jmp(label) => format!("jmp {label}"),
            Instr::CJmp(label) => format!("cjmp {label}"),

            Instr::Call(name, argc) => format!("call {} {argc}", name.as_str()),
            Instr::Ret => "ret".to_string(),

            Instr::Print => "print".to_string(),
            Instr::Delay => "delay".to_string(),
            Instr::Read => "read".to_string(),
            Instr::Pixel => "pixel".to_string(),
            Instr::PixelR => "pixelr".to_string(),
            Instr::Width => "width".to_string(),
            Instr::Height => "height".to_string(),
            Instr::Irnd => "irnd".to_string(),

            Instr::Label(label) => label.to_string(),
        }
    }
}

/// A string literal's PixIR encoding: decimal Unicode code points, comma-separated.
fn encode_string(s: &str) -> String {
    s.chars().map(|c| (c as u32).to_string()).collect::<Vec<_>>().join(",")
}

/// Renders a whole instruction stream as PixIR text, one line per instruction.
pub fn render(instrs: &[Instr]) -> String {
    instrs.iter().map(Instr::to_line).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_decimal() {
        assert_eq!(Instr::PushInt(17).to_line(), "push 17");
    }

    #[test]
    fn colours_render_as_hex() {
        assert_eq!(Instr::PushColour(Colour::new(0xFF, 0x00, 0xAA)).to_line(), "push #FF00AA");
    }

    #[test]
    fn strings_render_as_comma_separated_code_points() {
        let s = Symbol::intern("hi");
        assert_eq!(Instr::PushString(s).to_line(), "push \"104,105\"");
    }

    #[test]
    fn labels_render_with_their_leading_dot() {
        assert_eq!(Instr::Label(Label::named("add")).to_line(), ".add");
    }

    #[test]
    fn calls_include_argument_count() {
        let name = Symbol::intern("add");
        assert_eq!(Instr::Call(name, 2).to_line(), "call add 2");
    }
}
