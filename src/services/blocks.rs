//! Field records for dynamic document blocks.

use crate::domain::block::{BlockData, BlockType, BlockValue};
use crate::domain::context::TemplateContext;
use crate::domain::variable::Variable;
use crate::services::variables::resolve;

const HEADER_FIELDS: &[(&str, Variable)] = &[
    ("aziendaNome", Variable::CompanyName),
    ("aziendaIndirizzo", Variable::CompanyAddress),
    ("aziendaEmail", Variable::CompanyEmail),
    ("aziendaTelefono", Variable::CompanyPhone),
    ("aziendaPiva", Variable::CompanyVat),
    ("aziendaPec", Variable::CompanyPec),
];

const CLIENT_FIELDS: &[(&str, Variable)] = &[
    ("nomeCompleto", Variable::ClientFullName),
    ("email", Variable::ClientEmail),
    ("telefono", Variable::ClientPhone),
    ("indirizzo", Variable::ClientAddress),
    ("codiceFiscale", Variable::ClientTaxCode),
    ("partitaIva", Variable::ClientVat),
];

const PROPERTY_FIELDS: &[(&str, Variable)] = &[
    ("nome", Variable::PropertyName),
    ("indirizzo", Variable::PropertyAddress),
    ("tipologia", Variable::PropertyType),
    ("mq", Variable::PropertyArea),
    ("camere", Variable::PropertyBedrooms),
    ("bagni", Variable::PropertyBathrooms),
    ("maxOspiti", Variable::PropertyMaxGuests),
    ("cir", Variable::PropertyCir),
    ("cin", Variable::PropertyCin),
    ("commissione", Variable::PropertyCommission),
];

const TOTALS_FIELDS: &[(&str, Variable)] = &[
    ("subtotale", Variable::ProposalSubtotal),
    ("sconto", Variable::ProposalDiscount),
    ("totale", Variable::ProposalTotal),
];

/// Text fields resolved through the variable resolver; missing values become `""`.
fn text_fields(fields: &[(&'static str, Variable)], ctx: &TemplateContext) -> BlockData {
    fields
        .iter()
        .map(|&(key, variable)| (key, resolve(variable, ctx).unwrap_or_default().into()))
        .collect()
}

/// Builds the record a block of type `block` renders from.
pub fn resolve_block(block: BlockType, ctx: &TemplateContext) -> BlockData {
    match block {
        BlockType::Header => {
            let mut data = text_fields(HEADER_FIELDS, ctx);
            // Proposals carry their own number and date when no document metadata is set.
            let number = resolve(Variable::DocumentNumber, ctx)
                .or_else(|| resolve(Variable::ProposalNumber, ctx));
            let date = resolve(Variable::DocumentDate, ctx)
                .or_else(|| resolve(Variable::ProposalDate, ctx));
            data.insert("documentoNumero", number.unwrap_or_default().into());
            data.insert("documentoData", date.unwrap_or_default().into());
            data
        }
        BlockType::Client => text_fields(CLIENT_FIELDS, ctx),
        BlockType::Property => text_fields(PROPERTY_FIELDS, ctx),
        BlockType::Totals => text_fields(TOTALS_FIELDS, ctx),
        BlockType::ServicesTable => {
            let items = ctx
                .proposal
                .as_ref()
                .map(|proposal| proposal.items.clone())
                .unwrap_or_default();
            let mut data = BlockData::new();
            data.insert("hasItems", (!items.is_empty()).into());
            data.insert("items", BlockValue::Items(items));
            data
        }
    }
}

/// Resolves a block by name; unknown names give an empty record.
pub fn resolve_block_str(name: &str, ctx: &TemplateContext) -> BlockData {
    match name.parse::<BlockType>() {
        Ok(block) => resolve_block(block, ctx),
        Err(err) => {
            log::debug!("{err}");
            BlockData::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::{DocumentMeta, LineItem, Proposal, PropertyRecord};

    fn text<'a>(data: &'a BlockData, key: &str) -> &'a str {
        data.get(key).and_then(BlockValue::as_text).unwrap_or("<missing>")
    }

    #[test]
    fn services_table_flags_items() {
        let empty = resolve_block(BlockType::ServicesTable, &TemplateContext::default());
        assert_eq!(empty.get("hasItems"), Some(&BlockValue::Flag(false)));
        assert_eq!(empty.get("items"), Some(&BlockValue::Items(Vec::new())));
        assert_eq!(empty.len(), 2);

        let item = LineItem {
            description: "Pulizie".into(),
            quantity: 4.0,
            unit_price: 50.0,
            total: 200.0,
        };
        let ctx = TemplateContext::default().with_proposal(Proposal {
            items: vec![item.clone()],
            ..Default::default()
        });
        let full = resolve_block(BlockType::ServicesTable, &ctx);
        assert_eq!(full.get("hasItems"), Some(&BlockValue::Flag(true)));
        assert_eq!(full.get("items"), Some(&BlockValue::Items(vec![item])));
    }

    #[test]
    fn header_falls_back_to_proposal_number() {
        let ctx = TemplateContext::default().with_proposal(Proposal {
            number: Some("PR-7".into()),
            ..Default::default()
        });
        let data = resolve_block(BlockType::Header, &ctx);
        assert_eq!(text(&data, "documentoNumero"), "PR-7");
        assert_eq!(text(&data, "aziendaNome"), "");

        let ctx = ctx.with_document(DocumentMeta {
            number: Some("DOC-1".into()),
            ..Default::default()
        });
        let data = resolve_block(BlockType::Header, &ctx);
        assert_eq!(text(&data, "documentoNumero"), "DOC-1");
    }

    #[test]
    fn property_block_uses_type_labels() {
        let ctx = TemplateContext::default().with_property(PropertyRecord {
            property_type: Some("trullo".into()),
            max_guests: Some(6),
            ..Default::default()
        });
        let data = resolve_block(BlockType::Property, &ctx);
        assert_eq!(text(&data, "tipologia"), "trullo");
        assert_eq!(text(&data, "maxOspiti"), "6");
        assert_eq!(data.len(), PROPERTY_FIELDS.len());
    }

    #[test]
    fn unknown_block_is_empty() {
        assert!(resolve_block_str("footer", &TemplateContext::default()).is_empty());
    }
}
