//! In-memory instruction table and its default search primitive.

use crate::domain::search::{Direction, SearchKind, SearchQuery, SearchResult};
use crate::listing::backend::Finder;

/// One disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Program counter value of the instruction.
    pub address: u64,
    /// Instruction text as displayed, e.g. `mov eax, 1`.
    pub text: String,
}

impl Instruction {
    #[must_use]
    pub fn new(address: u64, text: impl Into<String>) -> Self {
        Self {
            address,
            text: text.into(),
        }
    }
}

/// Ordered disassembly listing addressed by zero-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionTable {
    instructions: Vec<Instruction>,
}

impl InstructionTable {
    #[must_use]
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Instruction> {
        self.instructions.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

/// Linear-scan [`Finder`] over an [`InstructionTable`].
///
/// # Matching Rules
///
/// - `ProgramCounter`: the pattern is parsed as hex (optional `0x` prefix) and
///   compared to addresses exactly. Unparsable patterns fall back to a
///   case-insensitive substring match on the `{:x}` formatted address. A
///   bare prefix such as `0x` has no digits and matches nothing.
/// - `Instruction`: case-insensitive substring match on the text.
///
/// A start position outside the table never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFinder;

enum Matcher {
    Nothing,
    Address(u64),
    AddressText(String),
    Text(String),
}

impl Matcher {
    fn new(pattern: &str, kind: SearchKind) -> Self {
        match kind {
            SearchKind::ProgramCounter => {
                let digits = pattern
                    .strip_prefix("0x")
                    .or_else(|| pattern.strip_prefix("0X"))
                    .unwrap_or(pattern);
                if digits.is_empty() {
                    return Self::Nothing;
                }
                u64::from_str_radix(digits, 16)
                    .map_or_else(|_| Self::AddressText(digits.to_lowercase()), Self::Address)
            }
            SearchKind::Instruction => Self::Text(pattern.to_lowercase()),
        }
    }

    fn matches(&self, instruction: &Instruction) -> bool {
        match self {
            Self::Nothing => false,
            Self::Address(address) => instruction.address == *address,
            Self::AddressText(needle) => format!("{:x}", instruction.address).contains(needle),
            Self::Text(needle) => instruction.text.to_lowercase().contains(needle),
        }
    }
}

impl Finder for TableFinder {
    fn find(&self, table: &InstructionTable, query: &SearchQuery) -> SearchResult {
        if query.start >= table.len() {
            return SearchResult::not_found();
        }

        let matcher = Matcher::new(&query.pattern, query.kind);
        let hit = match query.direction {
            Direction::Down => (query.start..table.len())
                .find(|&i| table.get(i).is_some_and(|inst| matcher.matches(inst))),
            Direction::Up => (0..=query.start)
                .rev()
                .find(|&i| table.get(i).is_some_and(|inst| matcher.matches(inst))),
        };

        tracing::trace!(
            pattern = %query.pattern,
            kind = %query.kind,
            start = query.start,
            hit = ?hit,
            "table search"
        );

        hit.map_or_else(SearchResult::not_found, SearchResult::found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InstructionTable {
        InstructionTable::new(vec![
            Instruction::new(0x1000, "push rbp"),
            Instruction::new(0x1001, "mov rbp, rsp"),
            Instruction::new(0x1004, "sub rsp, 0x10"),
            Instruction::new(0x1008, "MOV eax, 0"),
            Instruction::new(0x100d, "ret"),
        ])
    }

    fn query(pattern: &str, kind: SearchKind, direction: Direction, start: usize) -> SearchQuery {
        SearchQuery {
            pattern: pattern.into(),
            kind,
            direction,
            start,
        }
    }

    #[test]
    fn finds_instruction_text_downward_inclusive() {
        let t = table();
        let r = TableFinder.find(&t, &query("mov", SearchKind::Instruction, Direction::Down, 1));
        assert_eq!(r.position(), Some(1));

        let r = TableFinder.find(&t, &query("mov", SearchKind::Instruction, Direction::Down, 2));
        assert_eq!(r.position(), Some(3));
    }

    #[test]
    fn finds_instruction_text_upward() {
        let t = table();
        let r = TableFinder.find(&t, &query("mov", SearchKind::Instruction, Direction::Up, 2));
        assert_eq!(r.position(), Some(1));

        let r = TableFinder.find(&t, &query("ret", SearchKind::Instruction, Direction::Up, 3));
        assert!(!r.is_valid());
    }

    #[test]
    fn program_counter_matches_exact_address() {
        let t = table();
        let r = TableFinder.find(&t, &query("0x1008", SearchKind::ProgramCounter, Direction::Down, 0));
        assert_eq!(r.position(), Some(3));

        let r = TableFinder.find(&t, &query("100D", SearchKind::ProgramCounter, Direction::Down, 0));
        assert_eq!(r.position(), Some(4));

        let r = TableFinder.find(&t, &query("0x2000", SearchKind::ProgramCounter, Direction::Down, 0));
        assert_eq!(r.position(), None);
    }

    #[test]
    fn bare_hex_prefix_matches_nothing() {
        let t = table();
        for pattern in ["0x", "0X"] {
            let r = TableFinder.find(&t, &query(pattern, SearchKind::ProgramCounter, Direction::Down, 0));
            assert_eq!(r.position(), None, "pattern {pattern}");
        }
        let r = TableFinder.find(&t, &query("0x", SearchKind::ProgramCounter, Direction::Up, 4));
        assert_eq!(r.position(), None);
    }

    #[test]
    fn start_outside_table_never_matches() {
        let t = table();
        let r = TableFinder.find(&t, &query("ret", SearchKind::Instruction, Direction::Down, 5));
        assert!(!r.is_valid());
        let r = TableFinder.find(&InstructionTable::default(), &query("x", SearchKind::Instruction, Direction::Up, 0));
        assert!(!r.is_valid());
    }
}
