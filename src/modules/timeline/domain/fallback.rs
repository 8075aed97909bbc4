// src/modules/timeline/domain/fallback.rs
//
// Content of last resort: the public page substitutes this dataset when
// the remote collection errors out or comes back empty, so a cold or
// offline start never renders an empty timeline.

use chrono::NaiveDate;

use super::entities::{EntryKind, TimelineEntry};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("literal fallback date")
}

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn fallback_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: "1".into(),
            kind: EntryKind::Education,
            title: "Análise e Desenvolvimento de Sistemas".into(),
            institution: "Centro Universitário de João Pessoa (UNIPÊ)".into(),
            start_date: d(2023, 2, 1),
            end_date: None,
            ongoing: true,
            description: Some(
                "Curso focado em desenvolvimento de software, banco de dados, engenharia de \
                 software e gestão de projetos de TI."
                    .into(),
            ),
            activities: vec![],
            visible: true,
        },
        TimelineEntry {
            id: "2".into(),
            kind: EntryKind::Experience,
            title: "Supervisor de Condomínio".into(),
            institution: "Condomínio Residencial Reserva do Atlântico".into(),
            start_date: d(2022, 11, 1),
            end_date: None,
            ongoing: true,
            description: Some("Gestão administrativa e operacional completa do condomínio.".into()),
            activities: s(&[
                "Gestão de equipe de colaboradores e prestadores de serviços",
                "Atendimento multicanal aos proprietários (presencial, telefone e WhatsApp)",
                "Elaboração de relatórios gerenciais e controle via planilhas Excel",
                "Gestão de fornecedores, cotações e contratos",
                "Organização de assembleias e apoio ao conselho gestor",
            ]),
            visible: true,
        },
        TimelineEntry {
            id: "3".into(),
            kind: EntryKind::Experience,
            title: "Auxiliar Contábil".into(),
            institution: "Conforte Administração de Condomínios".into(),
            start_date: d(2020, 10, 1),
            end_date: Some(d(2022, 9, 1)),
            ongoing: false,
            description: Some(
                "Atuação multifuncional em contabilidade, cobrança e atendimento.".into(),
            ),
            activities: s(&[
                "Geração e gestão de boletos de taxas condominiais",
                "Lançamento de despesas e conciliação bancária",
                "Elaboração de livros de prestação de contas",
                "Suporte em admissão e rescisão de funcionários",
                "Atendimento aos clientes via telefone e WhatsApp",
            ]),
            visible: true,
        },
        TimelineEntry {
            id: "4".into(),
            // "educacao" is absent from the icon/name tables upstream; it
            // is kept verbatim as an open category.
            kind: EntryKind::Other("educacao".into()),
            title: "MBA em Perícia Contábil e Gestão Tributária".into(),
            institution: "UNIESP / IESP".into(),
            start_date: d(2020, 3, 1),
            end_date: Some(d(2021, 11, 1)),
            ongoing: false,
            description: Some(
                "Especialização em análise contábil forense, planejamento tributário e gestão \
                 fiscal."
                    .into(),
            ),
            activities: vec![],
            visible: true,
        },
        TimelineEntry {
            id: "5".into(),
            kind: EntryKind::Experience,
            title: "Auxiliar Administrativo".into(),
            institution: "INITUS Consultores Associados".into(),
            start_date: d(2017, 6, 1),
            end_date: Some(d(2020, 9, 1)),
            ongoing: false,
            description: Some("Consultoria previdenciária para prefeituras municipais.".into()),
            activities: s(&[
                "Elaboração de relatórios técnicos sobre situação previdenciária",
                "Acompanhamento de obrigações das prefeituras assessoradas",
                "Gestão de parcelamentos de dívidas previdenciárias",
                "Análise de documentação e legislação previdenciária",
            ]),
            visible: true,
        },
        TimelineEntry {
            id: "6".into(),
            kind: EntryKind::Education,
            title: "Bacharel em Ciências Contábeis".into(),
            institution: "Universidade Federal da Paraíba (UFPB)".into(),
            start_date: d(2012, 3, 1),
            end_date: Some(d(2016, 9, 1)),
            ongoing: false,
            description: Some(
                "Formação em contabilidade, finanças e gestão empresarial. Registro CRC-PB \
                 012506/O-2."
                    .into(),
            ),
            activities: vec![],
            visible: true,
        },
        TimelineEntry {
            id: "7".into(),
            kind: EntryKind::Experience,
            title: "Analista de Crédito".into(),
            institution: "Banco Cidadão - Prefeitura Municipal de João Pessoa".into(),
            start_date: d(2014, 4, 1),
            end_date: Some(d(2015, 12, 1)),
            ongoing: false,
            description: Some("Programa de microcrédito da Prefeitura Municipal.".into()),
            activities: s(&[
                "Atendimento aos beneficiários do programa",
                "Análise técnica de crédito e viabilidade de negócios",
                "Elaboração de planilhas de acompanhamento",
                "Geração de relatórios semanais de performance",
            ]),
            visible: true,
        },
        TimelineEntry {
            id: "8".into(),
            kind: EntryKind::Education,
            title: "Bacharel em Arquivologia".into(),
            institution: "Universidade Estadual da Paraíba (UEPB)".into(),
            start_date: d(2008, 3, 1),
            end_date: Some(d(2014, 7, 1)),
            ongoing: false,
            description: Some(
                "Formação em gestão documental e organização de informações. Registro MTE como \
                 Arquivista."
                    .into(),
            ),
            activities: vec![],
            visible: true,
        },
    ]
}
