// src/modules/projects/domain/fallback.rs
//
// Content of last resort for the projects gallery, mirroring the
// timeline fallback: substituted when the remote collection errors out
// or comes back empty.

use super::entities::ProjectEntry;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn fallback_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: "1".into(),
            title: "CineHub - Portal de Cinema".into(),
            description: "Plataforma completa para descoberta de filmes e séries com interface \
                          moderna e intuitiva."
                .into(),
            long_description: Some(
                "CineHub é uma aplicação web desenvolvida para cinéfilos e entusiastas de séries. \
                 O projeto demonstra minha capacidade de criar interfaces atraentes e funcionais, \
                 integrando APIs externas para buscar informações atualizadas sobre filmes, \
                 séries, trailers e avaliações.\n\nO sistema permite aos usuários pesquisar \
                 títulos, visualizar detalhes completos, assistir trailers e salvar favoritos. A \
                 interface responsiva garante uma experiência consistente em qualquer dispositivo."
                    .into(),
            ),
            technologies: s(&["HTML5", "CSS3", "JavaScript", "API REST"]),
            features: s(&[
                "Busca de filmes e séries em tempo real",
                "Integração com API externa de cinema",
                "Sistema de favoritos persistente",
                "Visualização de trailers incorporados",
                "Design totalmente responsivo",
            ]),
            image_url: None,
            demo_url: Some("#".into()),
            repo_url: Some("https://github.com/DiasNatan".into()),
            featured: true,
            order: 1,
            visible: true,
        },
        ProjectEntry {
            id: "2".into(),
            title: "EngProject - Gestão de Projetos".into(),
            description: "Sistema completo para gerenciamento de projetos de engenharia com \
                          controle de tarefas e equipes."
                .into(),
            long_description: Some(
                "EngProject é uma aplicação desenvolvida para facilitar a gestão de projetos de \
                 engenharia civil. O sistema permite o cadastro de projetos, controle de etapas, \
                 gerenciamento de equipes e acompanhamento de prazos.\n\nCom autenticação segura, \
                 diferentes níveis de acesso e dashboard intuitivo, o EngProject demonstra minha \
                 capacidade de desenvolver soluções completas que atendem necessidades reais de \
                 negócio."
                    .into(),
            ),
            technologies: s(&["Python", "Flask", "MySQL", "Bootstrap", "JavaScript"]),
            features: s(&[
                "Sistema de login e autenticação segura",
                "Cadastro de projetos e etapas",
                "Gerenciamento de equipes e permissões",
                "Dashboard com indicadores visuais",
                "Geração de relatórios em PDF",
            ]),
            image_url: None,
            demo_url: Some("#".into()),
            repo_url: Some("https://github.com/DiasNatan".into()),
            featured: true,
            order: 2,
            visible: true,
        },
        ProjectEntry {
            id: "3".into(),
            title: "PartyTime - Site de Aniversário".into(),
            description: "Site temático e interativo para convite e organização de festa de \
                          aniversário."
                .into(),
            long_description: Some(
                "PartyTime foi desenvolvido como um convite digital interativo e sistema de \
                 confirmação de presença para uma festa de aniversário. O projeto demonstra \
                 criatividade no design e capacidade de criar experiências envolventes.\n\nO site \
                 conta com animações suaves, formulário de confirmação integrado ao banco de \
                 dados, galeria de fotos e informações sobre o evento."
                    .into(),
            ),
            technologies: s(&["HTML5", "CSS3", "JavaScript", "PHP", "MySQL"]),
            features: s(&[
                "Design temático personalizado",
                "Formulário de confirmação de presença",
                "Galeria de fotos animada",
                "Contador regressivo para o evento",
                "Animações e efeitos interativos",
            ]),
            image_url: None,
            demo_url: Some("#".into()),
            repo_url: Some("https://github.com/DiasNatan".into()),
            featured: false,
            order: 3,
            visible: true,
        },
        ProjectEntry {
            id: "4".into(),
            title: "SecretFriend - Amigo Secreto Digital".into(),
            description: "Aplicação web para organizar e sortear amigo secreto de forma \
                          automatizada e segura."
                .into(),
            long_description: Some(
                "SecretFriend é uma solução completa para organizar amigo secreto online. O \
                 sistema permite que o organizador cadastre participantes, defina valor do \
                 presente e realize o sorteio automático.\n\nCada participante recebe um link \
                 exclusivo para descobrir quem tirou, sem que o organizador tenha acesso. O \
                 projeto demonstra lógica de programação e preocupação com privacidade."
                    .into(),
            ),
            technologies: s(&["JavaScript", "Node.js", "Express", "MongoDB"]),
            features: s(&[
                "Cadastro de participantes",
                "Sorteio automático inteligente",
                "Links individuais seguros",
                "Sistema de notificações por email",
                "Histórico de sorteios realizados",
            ]),
            image_url: None,
            demo_url: Some("#".into()),
            repo_url: Some("https://github.com/DiasNatan".into()),
            featured: false,
            order: 4,
            visible: true,
        },
        ProjectEntry {
            id: "5".into(),
            title: "TaskFlow - Gerenciador de Tarefas".into(),
            description: "Sistema pessoal de gerenciamento de tarefas com categorias e controle \
                          de produtividade."
                .into(),
            long_description: Some(
                "TaskFlow é um gerenciador de tarefas desenvolvido para aumentar a produtividade \
                 pessoal e profissional. A aplicação permite criar tarefas, organizá-las por \
                 categorias, definir prazos e acompanhar o progresso através de dashboards \
                 visuais.\n\nCom sistema de login individual, cada usuário tem seu próprio espaço \
                 para gerenciar atividades."
                    .into(),
            ),
            technologies: s(&["React", "Node.js", "PostgreSQL", "JWT", "Chart.js"]),
            features: s(&[
                "Autenticação com JWT",
                "CRUD completo de tarefas",
                "Categorização e tags",
                "Dashboard visual com gráficos",
                "Filtros e buscas avançadas",
            ]),
            image_url: None,
            demo_url: Some("#".into()),
            repo_url: Some("https://github.com/DiasNatan".into()),
            featured: false,
            order: 5,
            visible: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_five_projects() {
        assert_eq!(fallback_projects().len(), 5);
    }

    #[test]
    fn fallback_order_values_are_nondecreasing() {
        let projects = fallback_projects();
        assert!(projects.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn fallback_projects_are_all_visible() {
        assert!(fallback_projects().iter().all(|p| p.visible));
    }
}
