//! Read-only business data snapshot used to resolve document templates.
//!
//! Every field is optional: the application assembles whatever records it
//! has loaded and resolution degrades to "no value" for the rest.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::stage::{EntityKind, Staged};
use crate::domain::types::StageCode;
use crate::formatting::{join_address, text};

/// Display labels for stored property type codes.
pub static PROPERTY_TYPE_LABELS: &[(&str, &str)] = &[
    ("appartamento", "Appartamento"),
    ("monolocale", "Monolocale"),
    ("bilocale", "Bilocale"),
    ("trilocale", "Trilocale"),
    ("attico", "Attico"),
    ("loft", "Loft"),
    ("villa", "Villa"),
    ("villetta", "Villetta a schiera"),
    ("casa_indipendente", "Casa indipendente"),
    ("casa_vacanze", "Casa vacanze"),
    ("rustico", "Rustico"),
    ("baita", "Baita"),
    ("camera", "Camera privata"),
];

/// Label for a property type code, the raw code when no label matches.
pub fn property_type_label(code: &str) -> &str {
    PROPERTY_TYPE_LABELS
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |(_, label)| *label)
}

/// Reads a stored stage id, treating blank strings as "no stage".
fn blank_stage_as_none<'de, D>(deserializer: D) -> Result<Option<StageCode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .filter(|raw| !raw.trim().is_empty())
        .map(StageCode::new)
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub vat_number: Option<String>,
    pub pec: Option<String>,
}

impl CompanyProfile {
    pub fn address_line(&self) -> Option<String> {
        join_address(
            self.address.as_deref(),
            self.postal_code.as_deref(),
            self.city.as_deref(),
            self.province.as_deref(),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Business name for company clients.
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub tax_code: Option<String>,
    pub vat_number: Option<String>,
    #[serde(deserialize_with = "blank_stage_as_none")]
    pub stage: Option<StageCode>,
}

impl ClientRecord {
    /// `first last`, or the business name when neither is set.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<String> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(text)
            .collect();

        if parts.is_empty() {
            text(self.company_name.as_deref())
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn address_line(&self) -> Option<String> {
        join_address(
            self.address.as_deref(),
            self.postal_code.as_deref(),
            self.city.as_deref(),
            self.province.as_deref(),
        )
    }
}

impl Staged for ClientRecord {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::Client
    }

    fn stage_code(&self) -> Option<&StageCode> {
        self.stage.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    /// Stored type code, see [`PROPERTY_TYPE_LABELS`].
    pub property_type: Option<String>,
    pub square_meters: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub max_guests: Option<u32>,
    /// Regional identification code.
    pub cir: Option<String>,
    /// National identification code.
    pub cin: Option<String>,
    /// Management commission, in percent.
    pub commission: Option<f64>,
    #[serde(deserialize_with = "blank_stage_as_none")]
    pub stage: Option<StageCode>,
}

impl PropertyRecord {
    pub fn address_line(&self) -> Option<String> {
        join_address(
            self.address.as_deref(),
            self.postal_code.as_deref(),
            self.city.as_deref(),
            self.province.as_deref(),
        )
    }

    pub fn type_label(&self) -> Option<String> {
        text(self.property_type.as_deref()).map(|code| property_type_label(&code).to_string())
    }
}

impl Staged for PropertyRecord {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::Property
    }

    fn stage_code(&self) -> Option<&StageCode> {
        self.stage.as_ref()
    }
}

/// One row of a proposal's services table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proposal {
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    pub subtotal: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
    pub items: Vec<LineItem>,
}

/// Generic metadata of the document being rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMeta {
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    pub expiry: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateContext {
    pub company: Option<CompanyProfile>,
    pub client: Option<ClientRecord>,
    pub property: Option<PropertyRecord>,
    pub proposal: Option<Proposal>,
    pub document: Option<DocumentMeta>,
    /// Reference date for `oggi`-style tokens; the local date when unset.
    pub today: Option<NaiveDate>,
}

impl TemplateContext {
    #[must_use]
    pub fn with_company(mut self, company: CompanyProfile) -> Self {
        self.company = Some(company);
        self
    }

    #[must_use]
    pub fn with_client(mut self, client: ClientRecord) -> Self {
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyRecord) -> Self {
        self.property = Some(property);
        self
    }

    #[must_use]
    pub fn with_proposal(mut self, proposal: Proposal) -> Self {
        self.proposal = Some(proposal);
        self
    }

    #[must_use]
    pub fn with_document(mut self, document: DocumentMeta) -> Self {
        self.document = Some(document);
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
