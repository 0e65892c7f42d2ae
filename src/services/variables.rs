//! Resolution of template variables against a context snapshot.

use chrono::Datelike;

use crate::domain::context::TemplateContext;
use crate::domain::variable::Variable;
use crate::formatting::{currency, long_date, number, percent, short_date, text};

/// Formatted display value of `variable`, `None` when the context has no data for it.
pub fn resolve(variable: Variable, ctx: &TemplateContext) -> Option<String> {
    let document = ctx.document.as_ref();
    let proposal = ctx.proposal.as_ref();
    let company = ctx.company.as_ref();
    let client = ctx.client.as_ref();
    let property = ctx.property.as_ref();

    match variable {
        Variable::Today => Some(long_date(ctx.today())),
        Variable::TodayShort => Some(short_date(ctx.today())),
        Variable::Year => Some(ctx.today().year().to_string()),

        Variable::DocumentNumber => document.and_then(|d| text(d.number.as_deref())),
        Variable::DocumentDate => document.and_then(|d| d.date).map(long_date),
        Variable::DocumentExpiry => document.and_then(|d| d.expiry).map(long_date),

        Variable::ProposalNumber => proposal.and_then(|p| text(p.number.as_deref())),
        Variable::ProposalDate => proposal.and_then(|p| p.date).map(long_date),
        Variable::ProposalTotal => proposal.and_then(|p| p.total).map(currency),
        Variable::ProposalSubtotal => proposal.and_then(|p| p.subtotal).map(currency),
        Variable::ProposalDiscount => proposal.and_then(|p| p.discount).map(currency),

        Variable::CompanyName => company.and_then(|c| text(c.name.as_deref())),
        Variable::CompanyAddress => company.and_then(|c| c.address_line()),
        Variable::CompanyEmail => company.and_then(|c| text(c.email.as_deref())),
        Variable::CompanyPhone => company.and_then(|c| text(c.phone.as_deref())),
        Variable::CompanyVat => company.and_then(|c| text(c.vat_number.as_deref())),
        Variable::CompanyPec => company.and_then(|c| text(c.pec.as_deref())),

        Variable::ClientFullName => client.and_then(|c| c.full_name()),
        Variable::ClientFirstName => client.and_then(|c| text(c.first_name.as_deref())),
        Variable::ClientLastName => client.and_then(|c| text(c.last_name.as_deref())),
        Variable::ClientEmail => client.and_then(|c| text(c.email.as_deref())),
        Variable::ClientPhone => client.and_then(|c| text(c.phone.as_deref())),
        Variable::ClientAddress => client.and_then(|c| c.address_line()),
        Variable::ClientTaxCode => client.and_then(|c| text(c.tax_code.as_deref())),
        Variable::ClientVat => client.and_then(|c| text(c.vat_number.as_deref())),

        Variable::PropertyName => property.and_then(|p| text(p.name.as_deref())),
        Variable::PropertyAddress => property.and_then(|p| p.address_line()),
        Variable::PropertyType => property.and_then(|p| p.type_label()),
        Variable::PropertyArea => property.and_then(|p| p.square_meters).map(number),
        Variable::PropertyBedrooms => property.and_then(|p| p.bedrooms).map(|n| n.to_string()),
        Variable::PropertyBathrooms => property.and_then(|p| p.bathrooms).map(|n| n.to_string()),
        Variable::PropertyMaxGuests => property.and_then(|p| p.max_guests).map(|n| n.to_string()),
        Variable::PropertyCir => property.and_then(|p| text(p.cir.as_deref())),
        Variable::PropertyCin => property.and_then(|p| text(p.cin.as_deref())),
        Variable::PropertyCommission => property.and_then(|p| p.commission).map(percent),
    }
}

/// Parses and resolves a raw token; unknown tokens resolve to `None`.
pub fn resolve_token(token: &str, ctx: &TemplateContext) -> Option<String> {
    match token.trim().parse::<Variable>() {
        Ok(variable) => resolve(variable, ctx),
        Err(err) => {
            log::debug!("{err}");
            None
        }
    }
}

/// Resolved value, or the variable's example when the context has none.
pub fn resolve_or_example(variable: Variable, ctx: &TemplateContext) -> String {
    resolve(variable, ctx).unwrap_or_else(|| variable.example().to_string())
}
