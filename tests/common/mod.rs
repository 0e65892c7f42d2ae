#![allow(dead_code)]

use chrono::NaiveDate;
use property_crm::domain::context::{
    ClientRecord, CompanyProfile, DocumentMeta, LineItem, Proposal, PropertyRecord,
    TemplateContext,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn acme() -> CompanyProfile {
    CompanyProfile {
        name: Some("Acme Srl".into()),
        address: Some("Via Roma 1".into()),
        city: Some("Milano".into()),
        postal_code: Some("20100".into()),
        province: Some("MI".into()),
        email: Some("info@acme.it".into()),
        phone: Some("+39 02 1234567".into()),
        vat_number: Some("01234567890".into()),
        pec: Some("acme@pec.it".into()),
    }
}

/// A context with every sub-record and field populated.
pub fn full_context() -> TemplateContext {
    TemplateContext::default()
        .with_today(date(2025, 1, 3))
        .with_company(acme())
        .with_client(ClientRecord {
            first_name: Some("Mario".into()),
            last_name: Some("Rossi".into()),
            company_name: None,
            email: Some("mario.rossi@email.it".into()),
            phone: Some("+39 333 1234567".into()),
            address: Some("Via Garibaldi 10".into()),
            postal_code: Some("00100".into()),
            city: Some("Roma".into()),
            province: Some("RM".into()),
            tax_code: Some("RSSMRA80A01H501U".into()),
            vat_number: Some("09876543210".into()),
            stage: Some("C1".parse().expect("valid stage code")),
        })
        .with_property(PropertyRecord {
            name: Some("Casa Vista Lago".into()),
            address: Some("Via del Lago 5".into()),
            postal_code: Some("22100".into()),
            city: Some("Como".into()),
            province: Some("CO".into()),
            property_type: Some("appartamento".into()),
            square_meters: Some(85.0),
            bedrooms: Some(2),
            bathrooms: Some(1),
            max_guests: Some(4),
            cir: Some("013075-CNI-00012".into()),
            cin: Some("IT013075C2ABCDE123".into()),
            commission: Some(20.0),
            stage: Some("P3".parse().expect("valid stage code")),
        })
        .with_proposal(Proposal {
            number: Some("PR-2025-014".into()),
            date: Some(date(2025, 1, 3)),
            subtotal: Some(1500.0),
            discount: Some(100.0),
            total: Some(1400.0),
            items: vec![LineItem {
                description: "Gestione annunci".into(),
                quantity: 1.0,
                unit_price: 600.0,
                total: 600.0,
            }],
        })
        .with_document(DocumentMeta {
            number: Some("DOC-2025-031".into()),
            date: Some(date(2025, 1, 3)),
            expiry: Some(date(2025, 2, 2)),
        })
}
