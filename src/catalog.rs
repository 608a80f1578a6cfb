//! The searchable content catalog.
//!
//! Every entry the global search can surface is defined here, once, at
//! startup. An entry leads either to an in-app section (optionally with a
//! scroll anchor, an input to focus and a category pre-filter) or to an
//! external URL. The original data shape let an entry carry neither a
//! section nor a url; [`Target`] makes that unrepresentable, and
//! [`Catalog::new`] validates the remaining invariants (unique non-empty
//! ids, non-empty external urls) so selection-time code never has to.

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};
use crate::sections::{Category, SectionId};

/// Where a search entry leads. Exactly one kind per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Target {
    Section {
        section: SectionId,
        /// Element id to scroll into view once the section has rendered.
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "anchorId")]
        anchor_id: Option<String>,
        /// Selector for an input to focus after scrolling.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            rename = "focusSelector"
        )]
        focus_selector: Option<String>,
        /// Pre-filter applied to the announcements board before the
        /// section renders.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            rename = "categoryFilter"
        )]
        category_filter: Option<Category>,
    },
    External { url: String },
}

/// A static, catalog-defined searchable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: String,
    /// Display title for the result row.
    pub label: String,
    /// Secondary display line; may be empty.
    #[serde(default)]
    pub description: String,
    /// Matched against but never displayed.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub target: Target,
}

impl SearchEntry {
    /// Entry leading to an in-app section.
    fn section(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        section: SectionId,
        keywords: Vec<&str>,
    ) -> Self {
        SearchEntry {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            keywords: keywords.into_iter().map(String::from).collect(),
            target: Target::Section {
                section,
                anchor_id: None,
                focus_selector: None,
                category_filter: None,
            },
        }
    }

    /// Entry leading to an external URL.
    fn external(
        id: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
        keywords: Vec<&str>,
    ) -> Self {
        SearchEntry {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            keywords: keywords.into_iter().map(String::from).collect(),
            target: Target::External { url: url.into() },
        }
    }

    fn with_anchor(mut self, anchor: &str) -> Self {
        if let Target::Section { anchor_id, .. } = &mut self.target {
            *anchor_id = Some(anchor.to_string());
        }
        self
    }

    fn with_focus(mut self, selector: &str) -> Self {
        if let Target::Section { focus_selector, .. } = &mut self.target {
            *focus_selector = Some(selector.to_string());
        }
        self
    }

    fn with_filter(mut self, filter: Category) -> Self {
        if let Target::Section {
            category_filter, ..
        } = &mut self.target
        {
            *category_filter = Some(filter);
        }
        self
    }
}

/// Immutable, validated list of search entries. Loaded once at startup
/// and never mutated at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<SearchEntry>,
}

impl Catalog {
    /// Validate and freeze a set of entries.
    pub fn new(entries: Vec<SearchEntry>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(PortalError::EmptyEntryId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(PortalError::DuplicateEntryId {
                    id: entry.id.clone(),
                });
            }
            if let Target::External { url } = &entry.target {
                if url.is_empty() {
                    return Err(PortalError::EmptyExternalUrl {
                        id: entry.id.clone(),
                    });
                }
            }
        }
        Ok(Catalog { entries })
    }

    pub fn empty() -> Self {
        Catalog {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// URL of the official FCYT admissions page, reachable both from the tab
/// bar and from the `fcyt` search entry.
pub const FCYT_URL: &str = "https://sagaa.fcyt.umss.edu.bo/admision/noticias.php";

/// The portal's content catalog, in display order.
pub fn default_catalog() -> Catalog {
    let entries = vec![
        // PROCESO
        SearchEntry::section(
            "cronograma",
            "Cronograma oficial",
            "Fechas importantes",
            SectionId::Proceso,
            vec!["cronograma", "calendario", "fechas", "aulas", "resultados"],
        )
        .with_anchor("cronograma"),
        SearchEntry::section(
            "costos",
            "Costos de admisión",
            "Resumen de costos",
            SectionId::Proceso,
            vec!["costos", "precio", "pago", "bs", "inscripción"],
        )
        .with_anchor("costos"),
        SearchEntry::section(
            "documentos",
            "Documentos requeridos",
            "Guía y ejemplos",
            SectionId::Proceso,
            vec!["documentos", "requisitos", "ci", "diploma", "nacimiento"],
        )
        .with_anchor("documentos"),
        SearchEntry::section(
            "checklist",
            "Checklist de documentos (PDF)",
            "",
            SectionId::Proceso,
            vec!["checklist", "lista", "pdf", "descargar"],
        )
        .with_anchor("checklist"),
        // ANUNCIOS
        SearchEntry::section(
            "convocatorias",
            "Convocatorias",
            "",
            SectionId::Anuncios,
            vec!["convocatorias", "anuncios", "urgente", "abierto"],
        )
        .with_filter(Category::Convocatorias),
        SearchEntry::section(
            "examenes",
            "Noticias de exámenes",
            "",
            SectionId::Anuncios,
            vec!["examenes", "notas", "aulas", "resultados"],
        )
        .with_filter(Category::Examenes),
        SearchEntry::section(
            "noticias",
            "Noticias generales",
            "",
            SectionId::Anuncios,
            vec!["noticias", "comunicado", "aviso", "importante"],
        )
        .with_filter(Category::Noticias),
        // MATERIAL
        SearchEntry::section(
            "material",
            "Material de estudio",
            "",
            SectionId::Material,
            vec![
                "pdf",
                "material",
                "exámenes",
                "temario",
                "guías",
                "solucionario",
            ],
        )
        .with_anchor("material-buscador")
        .with_focus(r#"input[data-material-search="true"]"#),
        // APOYO
        SearchEntry::section(
            "contactos",
            "Personal de contacto",
            "Teléfonos y correos",
            SectionId::Apoyo,
            vec!["contacto", "personal", "teléfono", "correo", "coordinadora"],
        )
        .with_anchor("personal-contacto"),
        SearchEntry::section(
            "redes",
            "Redes sociales oficiales",
            "",
            SectionId::Apoyo,
            vec!["redes", "telegram", "whatsapp", "facebook"],
        )
        .with_anchor("redes-sociales"),
        SearchEntry::section(
            "formulario",
            "Enviar consulta",
            "Formulario",
            SectionId::Apoyo,
            vec!["formulario", "consulta", "mensaje", "ayuda"],
        )
        .with_anchor("formulario-contacto"),
        // TUTORIALES
        SearchEntry::section(
            "tutoriales-pasos",
            "Tutorial",
            "Guía paso a paso",
            SectionId::Tutoriales,
            vec!["tutorial", "pasos", "inscripción", "saga", "websis"],
        )
        .with_anchor("tutoriales-pasos"),
        SearchEntry::section(
            "manual",
            "Manual Registro al Sistema",
            "",
            SectionId::Tutoriales,
            vec!["manual", "pdf", "descargar", "guía"],
        )
        .with_anchor("manual-descargable"),
        // EXTERNO
        SearchEntry::external(
            "fcyt",
            "Página Oficial FCYT",
            FCYT_URL,
            vec!["fcyt", "oficial", "web", "noticias"],
        ),
    ];

    match Catalog::new(entries) {
        Ok(catalog) => catalog,
        Err(err) => {
            crate::debug_panic!("default catalog failed validation: {err}");
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 14);
        assert!(catalog.get("cronograma").is_some());
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![
            SearchEntry::section("a", "A", "", SectionId::Proceso, vec![]),
            SearchEntry::section("a", "A again", "", SectionId::Apoyo, vec![]),
        ];
        assert!(matches!(
            Catalog::new(entries),
            Err(PortalError::DuplicateEntryId { id }) if id == "a"
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let entries = vec![SearchEntry::section("", "A", "", SectionId::Proceso, vec![])];
        assert!(matches!(Catalog::new(entries), Err(PortalError::EmptyEntryId)));
    }

    #[test]
    fn test_empty_external_url_rejected() {
        let entries = vec![SearchEntry::external("x", "X", "", vec![])];
        assert!(matches!(
            Catalog::new(entries),
            Err(PortalError::EmptyExternalUrl { id }) if id == "x"
        ));
    }

    #[test]
    fn test_material_entry_carries_focus_selector() {
        let catalog = default_catalog();
        let material = catalog.get("material").unwrap();
        match &material.target {
            Target::Section {
                section,
                anchor_id,
                focus_selector,
                category_filter,
            } => {
                assert_eq!(*section, SectionId::Material);
                assert_eq!(anchor_id.as_deref(), Some("material-buscador"));
                assert_eq!(
                    focus_selector.as_deref(),
                    Some(r#"input[data-material-search="true"]"#)
                );
                assert!(category_filter.is_none());
            }
            Target::External { .. } => panic!("material should target a section"),
        }
    }

    #[test]
    fn test_target_serde_shape() {
        let entry = SearchEntry::section(
            "convocatorias",
            "Convocatorias",
            "",
            SectionId::Anuncios,
            vec!["convocatorias"],
        )
        .with_filter(Category::Convocatorias);
        let json = serde_json::to_value(&entry.target).unwrap();
        assert_eq!(json["kind"], "section");
        assert_eq!(json["section"], "anuncios");
        assert_eq!(json["categoryFilter"], "convocatorias");
        assert!(json.get("anchorId").is_none());

        let round: Target = serde_json::from_value(json).unwrap();
        assert_eq!(round, entry.target);
    }
}
