use std::borrow::Cow;

/// Action taken on referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
}

impl ReferentialAction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
        }
    }
}

/// Foreign key reference. Every key in the airport schema is also
/// `ON UPDATE CASCADE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: ReferentialAction,
}

impl ForeignKey {
    pub const fn cascade(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: "id",
            on_delete: ReferentialAction::Cascade,
        }
    }

    pub const fn set_null(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: "id",
            on_delete: ReferentialAction::SetNull,
        }
    }
}

/// A single table: its SQL name, positional column order, declared
/// foreign keys and the DDL that creates it.
///
/// `columns` is the order seed rows are bound in; `foreign_keys` mirrors the
/// constraints spelled out in `ddl`.
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
    pub ddl: Cow<'static, str>,
}

impl TableDefinition {
    /// Names of the tables this one references, in declaration order and
    /// without duplicates.
    pub fn dependencies(&self) -> Vec<&'static str> {
        let mut deps: Vec<&'static str> = Vec::new();
        for fk in self.foreign_keys {
            if !deps.contains(&fk.references_table) {
                deps.push(fk.references_table);
            }
        }
        deps
    }

    /// Position of `column` in the table's column order.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}
