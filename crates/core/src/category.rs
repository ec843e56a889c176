//! Fixed business-category registry.
//!
//! Categories are a closed set used for grouping and URL routing. Template
//! records carry a free-text label that is matched loosely against this
//! registry; unknown labels simply never match a category page.

use serde::Serialize;

/// A business-domain category for grouping templates.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier, doubles as the URL path segment.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon name consumed by the frontend.
    pub icon: &'static str,
    /// Accent color token consumed by the frontend.
    pub color: &'static str,
}

/// The full registry, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "financeiro",
        name: "Financeiro",
        description: "Planilhas de fluxo de caixa, orcamento, contas a pagar/receber e controle financeiro empresarial.",
        icon: "banknotes",
        color: "green",
    },
    Category {
        id: "estoque",
        name: "Estoque",
        description: "Controle de inventario, entrada e saida de produtos, alertas de reposicao e movimentacao.",
        icon: "archive-box",
        color: "emerald",
    },
    Category {
        id: "vendas",
        name: "Vendas",
        description: "Planilhas para gestao de vendas, comissoes, metas, CRM e funil de vendas.",
        icon: "chart-bar",
        color: "green",
    },
    Category {
        id: "rh",
        name: "RH",
        description: "Controle de funcionarios, ferias, folha de pagamento, banco de horas e indicadores de RH.",
        icon: "users",
        color: "teal",
    },
    Category {
        id: "projetos",
        name: "Projetos",
        description: "Cronogramas, Gantt, gestao de tarefas, acompanhamento de projetos e metodologias ageis.",
        icon: "clipboard-document-check",
        color: "cyan",
    },
    Category {
        id: "marketing",
        name: "Marketing",
        description: "Planejamento de campanhas, analise de ROI, calendario editorial e metricas de marketing.",
        icon: "megaphone",
        color: "lime",
    },
];

/// Look up a category by URL slug.
///
/// The slug is normalized before matching: trimmed, stripped of leading and
/// trailing `/`, lowercased. Unknown slugs return `None` (the category page
/// renders 404).
pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    let normalized = slug.trim().trim_matches('/').to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    CATEGORIES.iter().find(|c| c.id == normalized)
}
