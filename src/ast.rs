use std::collections::BTreeMap;
use std::fmt;

// BL abstract syntax: a Program owns a context of named instruction bodies
// plus a main body, and every body is a Block of owned Statements.

/// The closed set of BL test conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,
}

impl Condition {
    /// Parse a condition name, case-insensitively, accepting either the
    /// hyphenated surface spelling or the underscore variant.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "next-is-empty" => Some(Self::NextIsEmpty),
            "next-is-not-empty" => Some(Self::NextIsNotEmpty),
            "next-is-wall" => Some(Self::NextIsWall),
            "next-is-not-wall" => Some(Self::NextIsNotWall),
            "next-is-friend" => Some(Self::NextIsFriend),
            "next-is-not-friend" => Some(Self::NextIsNotFriend),
            "next-is-enemy" => Some(Self::NextIsEnemy),
            "next-is-not-enemy" => Some(Self::NextIsNotEnemy),
            "random" => Some(Self::Random),
            "true" => Some(Self::True),
            _ => None,
        }
    }

    /// Canonical lowercase-hyphen spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextIsEmpty => "next-is-empty",
            Self::NextIsNotEmpty => "next-is-not-empty",
            Self::NextIsWall => "next-is-wall",
            Self::NextIsNotWall => "next-is-not-wall",
            Self::NextIsFriend => "next-is-friend",
            Self::NextIsNotFriend => "next-is-not-friend",
            Self::NextIsEnemy => "next-is-enemy",
            Self::NextIsNotEnemy => "next-is-not-enemy",
            Self::Random => "random",
            Self::True => "true",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered sequence of statements. Blocks own their children directly;
/// editing is indexed insert/remove on the underlying vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    statements: Vec<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Statement> {
        self.statements.get(pos)
    }

    /// Insert `statement` at `pos`, shifting later children right.
    ///
    /// Panics if `pos > len()`.
    pub fn add(&mut self, pos: usize, statement: Statement) {
        self.statements.insert(pos, statement);
    }

    /// Append `statement` at the end of the block.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Remove and return the child at `pos`, shifting later children left.
    ///
    /// Panics if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> Statement {
        self.statements.remove(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl FromIterator<Statement> for Block {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// A single BL statement. Non-leaf variants own their nested blocks
/// exclusively; there is no sharing between subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Block(Block),
    If {
        condition: Condition,
        then_block: Block,
    },
    IfElse {
        condition: Condition,
        then_block: Block,
        else_block: Block,
    },
    While {
        condition: Condition,
        body: Block,
    },
    Call(String),
}

impl Statement {
    /// Indented structure dump, one node per line (used by `bl parse` and
    /// the parser tests).
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Statement::Block(block) => {
                out.push_str(&format!("{}Block\n", pad));
                for child in block {
                    child.write_tree(out, depth + 1);
                }
            }
            Statement::If {
                condition,
                then_block,
            } => {
                out.push_str(&format!("{}If '{}'\n", pad, condition));
                Statement::write_block_tree(then_block, out, depth + 1);
            }
            Statement::IfElse {
                condition,
                then_block,
                else_block,
            } => {
                out.push_str(&format!("{}IfElse '{}'\n", pad, condition));
                Statement::write_block_tree(then_block, out, depth + 1);
                Statement::write_block_tree(else_block, out, depth + 1);
            }
            Statement::While { condition, body } => {
                out.push_str(&format!("{}While '{}'\n", pad, condition));
                Statement::write_block_tree(body, out, depth + 1);
            }
            Statement::Call(name) => {
                out.push_str(&format!("{}Call '{}'\n", pad, name));
            }
        }
    }

    fn write_block_tree(block: &Block, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        out.push_str(&format!("{}Block\n", pad));
        for child in block {
            child.write_tree(out, depth + 1);
        }
    }
}

/// A complete BL program: a name, a context mapping user-defined instruction
/// names to their bodies, and the main body Block.
///
/// The parser guarantees that context keys are distinct legal identifiers and
/// never shadow a primitive instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    pub context: BTreeMap<String, Block>,
    pub body: Block,
}

impl Program {
    /// A fresh, unparsed program: `("Unnamed", {}, empty block)`.
    pub fn new() -> Self {
        Self {
            name: "Unnamed".to_string(),
            context: BTreeMap::new(),
            body: Block::new(),
        }
    }

    /// Indented structure dump of the whole program.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Program '{}'\n", self.name));
        for (name, body) in &self.context {
            out.push_str(&format!("  Instruction '{}'\n", name));
            Statement::write_block_tree(body, &mut out, 2);
        }
        out.push_str("  Body\n");
        Statement::write_block_tree(&self.body, &mut out, 2);
        out
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_name_normalizes() {
        assert_eq!(
            Condition::from_name("next-is-empty"),
            Some(Condition::NextIsEmpty)
        );
        assert_eq!(
            Condition::from_name("NEXT-IS-EMPTY"),
            Some(Condition::NextIsEmpty)
        );
        assert_eq!(
            Condition::from_name("next_is_not_wall"),
            Some(Condition::NextIsNotWall)
        );
        assert_eq!(Condition::from_name("TRUE"), Some(Condition::True));
        assert_eq!(Condition::from_name("next-is-sideways"), None);
        assert_eq!(Condition::from_name(""), None);
    }

    #[test]
    fn test_condition_name_round_trip() {
        let all = [
            Condition::NextIsEmpty,
            Condition::NextIsNotEmpty,
            Condition::NextIsWall,
            Condition::NextIsNotWall,
            Condition::NextIsFriend,
            Condition::NextIsNotFriend,
            Condition::NextIsEnemy,
            Condition::NextIsNotEnemy,
            Condition::Random,
            Condition::True,
        ];
        for cond in all {
            assert_eq!(Condition::from_name(cond.name()), Some(cond));
        }
    }

    #[test]
    fn test_block_indexed_editing() {
        let mut block = Block::new();
        assert!(block.is_empty());

        block.push(Statement::Call("move".to_string()));
        block.push(Statement::Call("infect".to_string()));
        block.add(1, Statement::Call("turn-left".to_string()));
        assert_eq!(block.len(), 3);
        assert_eq!(
            block.get(1),
            Some(&Statement::Call("turn-left".to_string()))
        );

        let removed = block.remove(0);
        assert_eq!(removed, Statement::Call("move".to_string()));
        assert_eq!(block.len(), 2);
        assert_eq!(
            block.get(0),
            Some(&Statement::Call("turn-left".to_string()))
        );
    }

    #[test]
    fn test_new_program_is_unnamed_and_empty() {
        let program = Program::new();
        assert_eq!(program.name, "Unnamed");
        assert!(program.context.is_empty());
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_statement_tree_string() {
        let statement = Statement::While {
            condition: Condition::NextIsNotEmpty,
            body: [
                Statement::Call("move".to_string()),
                Statement::Call("infect".to_string()),
            ]
            .into_iter()
            .collect(),
        };

        let expected = "\
While 'next-is-not-empty'
  Block
    Call 'move'
    Call 'infect'
";
        assert_eq!(statement.tree_string(), expected);
    }
}
