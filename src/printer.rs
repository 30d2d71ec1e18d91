use crate::ast::{Block, Program, Statement};

// Canonical BL pretty-printer. Printing is the structural inverse of
// parsing: re-tokenizing and re-parsing the output reconstructs the same
// tree, and formatting already-canonical source is idempotent.

/// Spaces per indentation level.
pub const INDENT: usize = 4;

/// Render a complete program in canonical form.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();

    out.push_str(&format!("PROGRAM {} IS\n\n", program.name));

    for (name, body) in &program.context {
        push_line(&mut out, INDENT, &format!("INSTRUCTION {} IS", name));
        write_block(&mut out, body, 2 * INDENT);
        push_line(&mut out, INDENT, &format!("END {}", name));
        out.push('\n');
    }

    out.push_str("BEGIN\n");
    write_block(&mut out, &program.body, INDENT);
    out.push_str(&format!("END {}\n", program.name));

    out
}

/// Render a single statement at indentation level zero.
pub fn print_statement(statement: &Statement) -> String {
    let mut out = String::new();
    write_statement(&mut out, statement, 0);
    out
}

fn write_block(out: &mut String, block: &Block, indent: usize) {
    for statement in block {
        write_statement(out, statement, indent);
    }
}

fn write_statement(out: &mut String, statement: &Statement, indent: usize) {
    match statement {
        Statement::Block(block) => {
            // A bare block prints its children at the same level
            write_block(out, block, indent);
        }
        Statement::If {
            condition,
            then_block,
        } => {
            push_line(out, indent, &format!("IF {} THEN", condition));
            write_block(out, then_block, indent + INDENT);
            push_line(out, indent, "END IF");
        }
        Statement::IfElse {
            condition,
            then_block,
            else_block,
        } => {
            push_line(out, indent, &format!("IF {} THEN", condition));
            write_block(out, then_block, indent + INDENT);
            push_line(out, indent, "ELSE");
            write_block(out, else_block, indent + INDENT);
            push_line(out, indent, "END IF");
        }
        Statement::While { condition, body } => {
            push_line(out, indent, &format!("WHILE {} DO", condition));
            write_block(out, body, indent + INDENT);
            push_line(out, indent, "END WHILE");
        }
        Statement::Call(name) => {
            push_line(out, indent, name);
        }
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push(' ');
    }
    out.push_str(text);
    out.push('\n');
}
