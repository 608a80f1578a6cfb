//! Section identifiers and the announcements board data.
//!
//! The portal renders one section at a time; which one is active lives in
//! a shared slot owned by the top-level state (see [`crate::state`]).
//! The announcements board additionally reads the shared category filter,
//! which a search selection may set before switching sections.

use serde::{Deserialize, Serialize};

/// The five in-app sections. The tab bar also carries an external link
/// (the official FCYT page), which is not a section; see
/// [`crate::app::TabAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Proceso,
    Anuncios,
    Material,
    Apoyo,
    Tutoriales,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Proceso => "proceso",
            SectionId::Anuncios => "anuncios",
            SectionId::Material => "material",
            SectionId::Apoyo => "apoyo",
            SectionId::Tutoriales => "tutoriales",
        }
    }

    /// Display title shown on the tab button.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Proceso => "Proceso de Admisión",
            SectionId::Anuncios => "Tablón de Anuncios",
            SectionId::Material => "Material de Consulta",
            SectionId::Apoyo => "Recursos de Apoyo",
            SectionId::Tutoriales => "Tutoriales",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Announcement category filter shared between the search control and the
/// announcements board. `All` admits every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Convocatorias,
    Examenes,
    Noticias,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Convocatorias => "convocatorias",
            Category::Examenes => "examenes",
            Category::Noticias => "noticias",
        }
    }

    /// Whether an item of `category` passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        *self == Category::All || *self == category
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single announcement on the board. Static content, loaded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: Category,
    pub status: &'static str,
    pub deadline: Option<&'static str>,
    pub urgent: bool,
}

pub const NEWS_ITEMS: &[NewsItem] = &[
    NewsItem {
        id: 1,
        title: "Convocatoria Examen de Admisión II/2025",
        excerpt: "Se convoca a todos los bachilleres interesados en postular a las carreras \
                  de la FCYT para la gestión 2025 presentarse para el examen de admisión en \
                  las fechas previstas.",
        date: "Hace 2 días",
        category: Category::Convocatorias,
        status: "abierto",
        deadline: Some("Faltan 5 días"),
        urgent: true,
    },
    NewsItem {
        id: 2,
        title: "Publicación de Resultados Curso Pre-Universitario - 3er Parcial",
        excerpt: "Ya se encuentran disponibles las notas del tercer parcial del Curso \
                  Pre-Universitario.",
        date: "Hace 5 horas",
        category: Category::Examenes,
        status: "nuevo",
        deadline: None,
        urgent: false,
    },
    NewsItem {
        id: 3,
        title: "Ampliación de inscripciones Prueba de Suficiencia Académica",
        excerpt: "Por determinaciones superiores se amplía el plazo de inscripciones para la \
                  Prueba de Suficiencia Académica hasta el 5 de febrero.",
        date: "Hace 1 semana",
        category: Category::Noticias,
        status: "importante",
        deadline: None,
        urgent: false,
    },
    NewsItem {
        id: 4,
        title: "Cronograma de asignación de aulas",
        excerpt: "Consulta tu aula y horario para el examen de admisión del domingo 20 de \
                  febrero.",
        date: "Hace 3 días",
        category: Category::Examenes,
        status: "proximamente",
        deadline: Some("Faltan 10 días"),
        urgent: false,
    },
    NewsItem {
        id: 5,
        title: "Suspensión de actividades administrativas",
        excerpt: "Por motivos de mantenimiento, no habrá atención en ventanillas el día \
                  viernes.",
        date: "Hace 2 semanas",
        category: Category::Noticias,
        status: "cerrado",
        deadline: None,
        urgent: false,
    },
    NewsItem {
        id: 6,
        title: "Nueva carrera de Ingeniería de Datos",
        excerpt: "La facultad abre una nueva carrera a partir de esta gestión. Conoce el plan \
                  de estudios.",
        date: "Hace 3 semanas",
        category: Category::Noticias,
        status: "nuevo",
        deadline: None,
        urgent: false,
    },
];

/// Items the announcements board shows under the given filter, in board order.
pub fn filter_news(filter: Category) -> Vec<&'static NewsItem> {
    NEWS_ITEMS
        .iter()
        .filter(|item| filter.admits(item.category))
        .collect()
}
