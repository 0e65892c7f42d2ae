//! The closed vocabulary of template variables.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::types::TypeConstraintError;

/// Editor grouping of variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableGroup {
    Date,
    Document,
    Proposal,
    Company,
    Client,
    Property,
}

impl VariableGroup {
    pub fn label(self) -> &'static str {
        match self {
            VariableGroup::Date => "Date",
            VariableGroup::Document => "Documento",
            VariableGroup::Proposal => "Proposta",
            VariableGroup::Company => "Azienda",
            VariableGroup::Client => "Cliente",
            VariableGroup::Property => "Proprietà",
        }
    }
}

/// How a resolved value is formatted for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    LongDate,
    ShortDate,
    Year,
    Currency,
    Percent,
    Number,
    Address,
    Text,
}

macro_rules! variables {
    ($( $variant:ident => $token:literal, $group:ident, $format:ident, $description:literal, $example:literal; )+) => {
        /// A template token such as `cliente.nome_completo`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Variable {
            $( #[doc = $description] $variant, )+
        }

        impl Variable {
            /// Every variable, in editor order.
            pub const ALL: &'static [Variable] = &[$( Variable::$variant, )+];

            /// The dotted token written inside `{{ }}`.
            pub const fn token(self) -> &'static str {
                match self {
                    $( Variable::$variant => $token, )+
                }
            }

            pub const fn group(self) -> VariableGroup {
                match self {
                    $( Variable::$variant => VariableGroup::$group, )+
                }
            }

            pub const fn format(self) -> ValueFormat {
                match self {
                    $( Variable::$variant => ValueFormat::$format, )+
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $( Variable::$variant => $description, )+
                }
            }

            /// Sample value shown in place of missing data.
            pub const fn example(self) -> &'static str {
                match self {
                    $( Variable::$variant => $example, )+
                }
            }
        }

        impl FromStr for Variable {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok(Variable::$variant), )+
                    other => Err(TypeConstraintError::UnknownVariable(other.to_string())),
                }
            }
        }
    };
}

variables! {
    Today => "oggi", Date, LongDate, "Data odierna", "3 gennaio 2025";
    TodayShort => "oggi_breve", Date, ShortDate, "Data odierna (formato breve)", "3/1/2025";
    Year => "anno", Date, Year, "Anno corrente", "2025";

    DocumentNumber => "documento.numero", Document, Text, "Numero documento", "DOC-2025-001";
    DocumentDate => "documento.data", Document, LongDate, "Data documento", "3 gennaio 2025";
    DocumentExpiry => "documento.scadenza", Document, LongDate, "Scadenza documento", "2 febbraio 2025";

    ProposalNumber => "proposta.numero", Proposal, Text, "Numero proposta", "PR-2025-001";
    ProposalDate => "proposta.data", Proposal, LongDate, "Data proposta", "3 gennaio 2025";
    ProposalTotal => "proposta.totale", Proposal, Currency, "Totale proposta", "1.220,00\u{a0}€";
    ProposalSubtotal => "proposta.subtotale", Proposal, Currency, "Subtotale proposta", "1.000,00\u{a0}€";
    ProposalDiscount => "proposta.sconto", Proposal, Currency, "Sconto proposta", "100,00\u{a0}€";

    CompanyName => "azienda.nome", Company, Text, "Ragione sociale", "Acme Srl";
    CompanyAddress => "azienda.indirizzo", Company, Address, "Indirizzo azienda", "Via Roma 1, 20100, Milano, (MI)";
    CompanyEmail => "azienda.email", Company, Text, "Email azienda", "info@acme.it";
    CompanyPhone => "azienda.telefono", Company, Text, "Telefono azienda", "+39 02 1234567";
    CompanyVat => "azienda.piva", Company, Text, "Partita IVA azienda", "01234567890";
    CompanyPec => "azienda.pec", Company, Text, "PEC azienda", "acme@pec.it";

    ClientFullName => "cliente.nome_completo", Client, Text, "Nome completo cliente", "Mario Rossi";
    ClientFirstName => "cliente.nome", Client, Text, "Nome cliente", "Mario";
    ClientLastName => "cliente.cognome", Client, Text, "Cognome cliente", "Rossi";
    ClientEmail => "cliente.email", Client, Text, "Email cliente", "mario.rossi@email.it";
    ClientPhone => "cliente.telefono", Client, Text, "Telefono cliente", "+39 333 1234567";
    ClientAddress => "cliente.indirizzo", Client, Address, "Indirizzo cliente", "Via Garibaldi 10, 00100, Roma, (RM)";
    ClientTaxCode => "cliente.cf", Client, Text, "Codice fiscale cliente", "RSSMRA80A01H501U";
    ClientVat => "cliente.piva", Client, Text, "Partita IVA cliente", "09876543210";

    PropertyName => "proprieta.nome", Property, Text, "Nome proprietà", "Casa Vista Lago";
    PropertyAddress => "proprieta.indirizzo", Property, Address, "Indirizzo proprietà", "Via del Lago 5, 22100, Como, (CO)";
    PropertyType => "proprieta.tipologia", Property, Text, "Tipologia proprietà", "Appartamento";
    PropertyArea => "proprieta.mq", Property, Number, "Superficie (mq)", "85";
    PropertyBedrooms => "proprieta.camere", Property, Number, "Numero camere", "2";
    PropertyBathrooms => "proprieta.bagni", Property, Number, "Numero bagni", "1";
    PropertyMaxGuests => "proprieta.max_ospiti", Property, Number, "Ospiti massimi", "4";
    PropertyCir => "proprieta.cir", Property, Text, "Codice CIR", "013075-CNI-00012";
    PropertyCin => "proprieta.cin", Property, Text, "Codice CIN", "IT013075C2ABCDE123";
    PropertyCommission => "proprieta.commissione", Property, Percent, "Commissione di gestione", "20%";
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// What to write in place of a variable that resolved to no value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderMode {
    /// The variable's example value.
    #[default]
    Example,
    /// The literal `{{ token }}`.
    Keep,
    /// Nothing.
    Blank,
}

impl FromStr for PlaceholderMode {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "example" => Ok(PlaceholderMode::Example),
            "keep" => Ok(PlaceholderMode::Keep),
            "blank" => Ok(PlaceholderMode::Blank),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_unique_and_parse_back() {
        let tokens: HashSet<_> = Variable::ALL.iter().map(|v| v.token()).collect();
        assert_eq!(tokens.len(), Variable::ALL.len());
        for variable in Variable::ALL {
            assert_eq!(variable.token().parse::<Variable>().unwrap(), *variable);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(
            "cliente.scarpe".parse::<Variable>(),
            Err(TypeConstraintError::UnknownVariable(
                "cliente.scarpe".to_string()
            ))
        );
    }

    #[test]
    fn variable_serializes_as_token() {
        let json = serde_json::to_string(&Variable::CompanyAddress).unwrap();
        assert_eq!(json, r#""azienda.indirizzo""#);
    }

    #[test]
    fn placeholder_mode_parses() {
        assert_eq!("keep".parse(), Ok(PlaceholderMode::Keep));
        assert!("loud".parse::<PlaceholderMode>().is_err());
    }
}
