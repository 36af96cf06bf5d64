//! Table definitions for the airport schema.
//!
//! Definitions are listed in creation order: a table only appears after
//! every table it references.

use std::borrow::Cow;

use super::types::{ForeignKey, TableDefinition};

// =============================================================================
// Root tables (no FK dependencies)
// =============================================================================

pub static LUCHTHAVEN: TableDefinition = TableDefinition {
    name: "luchthaven",
    columns: &["id", "naam", "stad", "land", "iata_code"],
    foreign_keys: &[],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS luchthaven (
            id INT PRIMARY KEY NOT NULL,
            naam VARCHAR(255) UNIQUE NOT NULL,
            stad VARCHAR(255) NOT NULL,
            land VARCHAR(255) NOT NULL,
            iata_code CHAR(3) UNIQUE NOT NULL
        );
        "#,
    ),
};

pub static VLIEGVELD: TableDefinition = TableDefinition {
    name: "vliegveld",
    columns: &["id", "naam"],
    foreign_keys: &[],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vliegveld (
            id INT PRIMARY KEY NOT NULL,
            naam VARCHAR(255) UNIQUE NOT NULL
        );
        "#,
    ),
};

pub static MAATSCHAPPIJ: TableDefinition = TableDefinition {
    name: "maatschappij",
    columns: &["id", "naam"],
    foreign_keys: &[],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS maatschappij (
            id INT PRIMARY KEY NOT NULL,
            naam VARCHAR(255) UNIQUE NOT NULL
        );
        "#,
    ),
};

// =============================================================================
// Airport infrastructure
// =============================================================================

pub static TERMINAL: TableDefinition = TableDefinition {
    name: "terminal",
    columns: &["id", "naam", "luchthaven_id"],
    foreign_keys: &[ForeignKey::cascade("luchthaven_id", "luchthaven")],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS terminal (
            id INT PRIMARY KEY NOT NULL,
            naam VARCHAR(50) NOT NULL,
            luchthaven_id INT,
            FOREIGN KEY (luchthaven_id) REFERENCES luchthaven(id)
            ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    ),
};

pub static GATE: TableDefinition = TableDefinition {
    name: "gate",
    columns: &["id", "naam", "terminal_id"],
    foreign_keys: &[ForeignKey::set_null("terminal_id", "terminal")],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS gate (
            id INT PRIMARY KEY NOT NULL,
            naam VARCHAR(255) UNIQUE NOT NULL,
            terminal_id INT,
            FOREIGN KEY (terminal_id) REFERENCES terminal(id)
            ON UPDATE CASCADE ON DELETE SET NULL
        );
        "#,
    ),
};

// =============================================================================
// Passengers and baggage
// =============================================================================

pub static REIZIGER: TableDefinition = TableDefinition {
    name: "reiziger",
    columns: &["id", "voornaam", "achternaam"],
    foreign_keys: &[],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS reiziger (
            id INT PRIMARY KEY NOT NULL,
            voornaam VARCHAR(255) NOT NULL,
            achternaam VARCHAR(255) NOT NULL
        );
        "#,
    ),
};

pub static BAGGAGE: TableDefinition = TableDefinition {
    name: "baggage",
    columns: &["id", "gate_id", "reiziger_id"],
    foreign_keys: &[
        ForeignKey::set_null("gate_id", "gate"),
        ForeignKey::cascade("reiziger_id", "reiziger"),
    ],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS baggage (
            id INT PRIMARY KEY NOT NULL,
            gate_id INT,
            reiziger_id INT,
            FOREIGN KEY (gate_id) REFERENCES gate(id)
            ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY (reiziger_id) REFERENCES reiziger(id)
            ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    ),
};

// =============================================================================
// Fleet and flights
// =============================================================================

pub static VLIEGTUIG: TableDefinition = TableDefinition {
    name: "vliegtuig",
    columns: &["id", "model", "capaciteit", "maatschappij_id"],
    foreign_keys: &[ForeignKey::cascade("maatschappij_id", "maatschappij")],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vliegtuig (
            id INT PRIMARY KEY NOT NULL,
            model VARCHAR(255) NOT NULL,
            capaciteit INT NOT NULL,
            maatschappij_id INT,
            FOREIGN KEY (maatschappij_id) REFERENCES maatschappij(id)
            ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    ),
};

pub static VLUCHT: TableDefinition = TableDefinition {
    name: "vlucht",
    columns: &[
        "id",
        "van",
        "naar",
        "gate_id",
        "vliegveld_id",
        "vliegtuig_id",
        "vertrek_luchthaven_id",
        "aankomst_luchthaven_id",
    ],
    foreign_keys: &[
        ForeignKey::set_null("gate_id", "gate"),
        ForeignKey::set_null("vliegtuig_id", "vliegtuig"),
        ForeignKey::set_null("vliegveld_id", "vliegveld"),
        ForeignKey::set_null("vertrek_luchthaven_id", "luchthaven"),
        ForeignKey::set_null("aankomst_luchthaven_id", "luchthaven"),
    ],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vlucht (
            id INT PRIMARY KEY NOT NULL,
            van VARCHAR(255) NOT NULL,
            naar VARCHAR(255) NOT NULL,
            gate_id INT,
            vliegveld_id INT,
            vliegtuig_id INT,
            vertrek_luchthaven_id INT,
            aankomst_luchthaven_id INT,
            FOREIGN KEY (gate_id) REFERENCES gate(id)
            ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY (vliegtuig_id) REFERENCES vliegtuig(id)
            ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY (vliegveld_id) REFERENCES vliegveld(id)
            ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY (vertrek_luchthaven_id) REFERENCES luchthaven(id)
            ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY (aankomst_luchthaven_id) REFERENCES luchthaven(id)
            ON UPDATE CASCADE ON DELETE SET NULL
        );
        "#,
    ),
};

pub static VLIEGTICKET: TableDefinition = TableDefinition {
    name: "vliegticket",
    columns: &["id", "vlucht_id", "reiziger_id", "baggage_id"],
    foreign_keys: &[
        ForeignKey::cascade("vlucht_id", "vlucht"),
        ForeignKey::cascade("reiziger_id", "reiziger"),
        ForeignKey::set_null("baggage_id", "baggage"),
    ],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vliegticket (
            id INT PRIMARY KEY NOT NULL,
            vlucht_id INT,
            reiziger_id INT,
            baggage_id INT,
            FOREIGN KEY (vlucht_id) REFERENCES vlucht(id)
            ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY (reiziger_id) REFERENCES reiziger(id)
            ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY (baggage_id) REFERENCES baggage(id)
            ON UPDATE CASCADE ON DELETE SET NULL
        );
        "#,
    ),
};

// =============================================================================
// Crew
// =============================================================================

pub static CREW: TableDefinition = TableDefinition {
    name: "crew",
    columns: &["id", "voornaam", "achternaam", "functie", "maatschappij_id"],
    foreign_keys: &[ForeignKey::set_null("maatschappij_id", "maatschappij")],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS crew (
            id INT PRIMARY KEY NOT NULL,
            voornaam VARCHAR(255) NOT NULL,
            achternaam VARCHAR(255) NOT NULL,
            functie VARCHAR(100) NOT NULL,
            maatschappij_id INT,
            FOREIGN KEY (maatschappij_id) REFERENCES maatschappij(id)
            ON UPDATE CASCADE ON DELETE SET NULL
        );
        "#,
    ),
};

/// Many-to-many join between aircraft and crew, keyed on both columns.
pub static VLIEGTUIG_CREW: TableDefinition = TableDefinition {
    name: "vliegtuig_crew",
    columns: &["vliegtuig_id", "crew_id"],
    foreign_keys: &[
        ForeignKey::cascade("vliegtuig_id", "vliegtuig"),
        ForeignKey::cascade("crew_id", "crew"),
    ],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vliegtuig_crew (
            vliegtuig_id INT NOT NULL,
            crew_id INT NOT NULL,
            PRIMARY KEY (vliegtuig_id, crew_id),
            FOREIGN KEY (vliegtuig_id) REFERENCES vliegtuig(id)
            ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY (crew_id) REFERENCES crew(id)
            ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    ),
};

pub static VLUCHTSCHEMA: TableDefinition = TableDefinition {
    name: "vluchtschema",
    columns: &["id", "vlucht_id", "vertrektijd", "aankomsttijd", "frequentie"],
    foreign_keys: &[ForeignKey::cascade("vlucht_id", "vlucht")],
    ddl: Cow::Borrowed(
        r#"
        CREATE TABLE IF NOT EXISTS vluchtschema (
            id INT PRIMARY KEY NOT NULL,
            vlucht_id INT,
            vertrektijd TIMESTAMP NOT NULL,
            aankomsttijd TIMESTAMP NOT NULL,
            frequentie VARCHAR(50),
            FOREIGN KEY (vlucht_id) REFERENCES vlucht(id)
            ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    ),
};

/// All tables in creation order.
pub static ALL_TABLES: &[&TableDefinition] = &[
    &LUCHTHAVEN,
    &VLIEGVELD,
    &MAATSCHAPPIJ,
    &TERMINAL,
    &GATE,
    &REIZIGER,
    &BAGGAGE,
    &VLIEGTUIG,
    &VLUCHT,
    &VLIEGTICKET,
    &CREW,
    &VLIEGTUIG_CREW,
    &VLUCHTSCHEMA,
];
