//! Fixed page content
//!
//! The portfolio is a single page with four sections. The set is fixed at
//! startup; panels and their navigation controls are built from this table.

/// One section of the page, as authored.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Identifier shared by the panel and its navigation control.
    pub id: &'static str,
    /// Label shown in the tab bar / drawer.
    pub label: &'static str,
    /// Body text, one entry per paragraph line.
    pub body: &'static [&'static str],
}

/// Identifier of the section shown on startup.
pub const DEFAULT_SECTION: &str = "sobre";

/// All sections, in display order.
pub fn sections() -> &'static [Section] {
    &[
        Section {
            id: "sobre",
            label: "Sobre",
            body: &[
                "Olá! Eu sou a Ana, desenvolvedora e estudante de tecnologia.",
                "",
                "Gosto de construir interfaces simples e acessíveis, e este",
                "portfólio reúne um pouco do que venho estudando e criando.",
                "",
                "Use as abas acima para navegar entre as seções.",
            ],
        },
        Section {
            id: "formacao",
            label: "Formação",
            body: &[
                "• Análise e Desenvolvimento de Sistemas — em andamento",
                "• Curso de desenvolvimento web (HTML, CSS, JavaScript)",
                "• Curso introdutório de lógica de programação",
                "",
                "Sempre em busca do próximo curso.",
            ],
        },
        Section {
            id: "portfolio",
            label: "Portfólio",
            body: &[
                "• Página pessoal — este projeto, uma single-page com abas,",
                "  tema claro/escuro e formulário de contato.",
                "• Lista de tarefas — CRUD simples com armazenamento local.",
                "• Galeria de fotos — grade responsiva com filtros.",
            ],
        },
        Section {
            id: "contato",
            label: "Contato",
            body: &[
                "Preencha o formulário abaixo para enviar uma mensagem.",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_exists() {
        assert!(sections().iter().any(|s| s.id == DEFAULT_SECTION));
    }

    #[test]
    fn test_section_ids_unique() {
        let all = sections();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
