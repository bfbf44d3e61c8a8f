use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::totals::models::{
    DocumentDefaults, DocumentTotals, LineItem, ResolvedConfig, Totals, TotalsPreview,
    TotalsRequest, VatMode,
};
use rust_decimal::Decimal;

use super::config_resolver::{parse_setting, resolve};
use super::normalizer::normalize;
use super::pipeline::compute;
use super::presenter::{format_totals, present, present_line, visible_vat};

/// Boundary facade used by the HTTP handlers and by any preview/PDF caller.
///
/// Holds only the company defaults it was constructed with; calculations
/// share no state, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct TotalsService {
    defaults: DocumentDefaults,
}

impl TotalsService {
    pub fn new(defaults: DocumentDefaults) -> Self {
        Self { defaults }
    }

    /// Normalize, resolve, compute and present one document.
    ///
    /// Either the whole calculation succeeds or an error is returned; there is
    /// no partial result.
    pub fn calculate(&self, request: &TotalsRequest) -> Result<DocumentTotals> {
        let (items, config) = self.prepare(request)?;
        let rounded = present(&compute(&items, &config));

        Ok(self.assemble(request, &items, &config, &rounded))
    }

    /// Same as `calculate`, plus currency strings for rendering.
    pub fn preview(&self, request: &TotalsRequest) -> Result<TotalsPreview> {
        let (items, config) = self.prepare(request)?;
        let rounded = present(&compute(&items, &config));

        Ok(TotalsPreview {
            formatted: format_totals(&rounded, config.vat_display),
            totals: self.assemble(request, &items, &config, &rounded),
        })
    }

    fn assemble(
        &self,
        request: &TotalsRequest,
        items: &[LineItem],
        config: &ResolvedConfig,
        rounded: &Totals,
    ) -> DocumentTotals {
        info!(
            document_kind = %request.document_kind,
            vat_mode = %config.vat_mode,
            line_items = items.len(),
            subtotal = %rounded.subtotal,
            total_due = %rounded.total_due,
            "Document totals calculated"
        );

        DocumentTotals {
            document_kind: request.document_kind,
            vat_mode: config.vat_mode,
            line_items: items.iter().map(present_line).collect(),
            subtotal: rounded.subtotal,
            discount: rounded.discount,
            net_after_discount: rounded.net_after_discount,
            vat_amount: visible_vat(rounded, config),
            vat_label: config.vat_display.row_label(),
            total_before_retention: rounded.total_before_retention,
            retention_percent: config.retention_percent,
            retention: rounded.retention,
            total_after_retention: rounded.total_after_retention,
            cis_percent: rounded.cis_percent,
            cis_deduction: rounded.cis_deduction,
            total_due: rounded.total_due,
            reverse_charge_notice_required: config.vat_display.requires_reverse_charge_notice(),
            reverse_charge_notice: config.vat_display.notice().map(str::to_string),
        }
    }

    fn prepare(&self, request: &TotalsRequest) -> Result<(Vec<LineItem>, ResolvedConfig)> {
        let items = normalize(&request.items).map_err(|err| {
            warn!(document_kind = %request.document_kind, error = %err, "Line item rejected");
            AppError::from(err)
        })?;

        let config = self.resolve_request(request).map_err(|err| {
            warn!(document_kind = %request.document_kind, error = %err, "Document configuration rejected");
            err
        })?;

        debug!(
            vat_mode = %config.vat_mode,
            discount_amount = %config.discount_amount,
            retention_percent = %config.retention_percent,
            cis_percent = %config.cis_percent,
            "Resolved document configuration"
        );

        Ok((items, config))
    }

    fn resolve_request(&self, request: &TotalsRequest) -> Result<ResolvedConfig> {
        let vat_mode = match request.vat_mode.as_deref() {
            Some(mode) if !mode.trim().is_empty() => VatMode::from_str(mode)?,
            _ => self.defaults.vat_mode,
        };

        let discount_amount = parse_setting("discount_amount", request.discount_amount.as_ref())?
            .unwrap_or(Decimal::ZERO);
        let retention_percent =
            parse_setting("retention_percent", request.retention_percent.as_ref())?
                .unwrap_or(self.defaults.retention_percent);
        let cis_percent = parse_setting("cis_percent", request.cis_percent.as_ref())?
            .unwrap_or(self.defaults.cis_percent);

        Ok(resolve(vat_mode, discount_amount, retention_percent, cis_percent)?)
    }
}
