#![allow(clippy::indexing_slicing)]

use std::any::Any;

use xmlgrove::{Attribute, ChildValue, FieldMapping, Node, Registry, TypeMapping};

type TestResult = Result<(), Box<dyn std::error::Error>>;

struct Componente {
    nome: String,
    peso: u32,
}

struct Avaliacao {
    componentes: Vec<Componente>,
}

struct Fuc {
    codigo: String,
    nome: String,
    ects: f64,
    observacoes: Option<String>,
    avaliacao: Vec<Componente>,
}

fn componente_mapping() -> TypeMapping {
    TypeMapping::new("componente")
        .field(
            FieldMapping::attribute("nome", |c: &Componente| Some(c.nome.clone()))
                .order(2)
                .transform(|s| s.to_uppercase()),
        )
        .field(
            FieldMapping::attribute("peso", |c: &Componente| Some(c.peso.to_string()))
                .order(1)
                .transform(|s| format!("{s}%")),
        )
}

fn componentes_items(a: &Avaliacao) -> ChildValue<'_> {
    ChildValue::items(
        format!("{} componentes", a.componentes.len()),
        a.componentes.iter().map(|c| c as &dyn Any).collect(),
    )
}

fn avaliacao_items(f: &Fuc) -> ChildValue<'_> {
    ChildValue::items(
        String::new(),
        f.avaliacao.iter().map(|c| c as &dyn Any).collect(),
    )
}

fn fuc_mapping() -> TypeMapping {
    TypeMapping::new("fuc")
        .field(FieldMapping::attribute("codigo", |f: &Fuc| Some(f.codigo.clone())).order(1))
        .field(FieldMapping::attribute("nome", |f: &Fuc| Some(f.nome.clone())).order(2))
        .field(FieldMapping::attribute("ects", |f: &Fuc| Some(f.ects.to_string())).order(3))
        .field(
            FieldMapping::attribute("observacoes", |f: &Fuc| f.observacoes.clone())
                .order(4)
                .ignore(),
        )
        .field(FieldMapping::child("avaliacao", avaliacao_items).order(5))
}

fn sample_fuc() -> Fuc {
    Fuc {
        codigo: "M4310".to_string(),
        nome: "Programação Avançada".to_string(),
        ects: 6.0,
        observacoes: None,
        avaliacao: vec![
            Componente {
                nome: "Quizzes".to_string(),
                peso: 20,
            },
            Componente {
                nome: "Projeto".to_string(),
                peso: 80,
            },
        ],
    }
}

#[test]
fn test_transformers_and_explicit_ordering() -> TestResult {
    let mut registry = Registry::new();
    registry.register::<Componente>(componente_mapping());

    let node = registry.to_node(&Componente {
        nome: "Quizzes".to_string(),
        peso: 20,
    })?;

    assert_eq!(node.name(), "componente");
    assert_eq!(
        node.attributes(),
        vec![
            Attribute::new("peso", "20%")?,
            Attribute::new("nome", "QUIZZES")?,
        ]
    );
    Ok(())
}

#[test]
fn test_nested_sequence_mapping() -> TestResult {
    let mut registry = Registry::new();
    registry.register::<Componente>(componente_mapping());
    registry.register::<Fuc>(fuc_mapping());

    let node = registry.to_node(&sample_fuc())?;

    assert_eq!(node.name(), "fuc");
    let children = node.children();
    assert_eq!(children.len(), 1);
    let avaliacao = &children[0];
    assert_eq!(avaliacao.name(), "avaliacao");
    let componentes = avaliacao.children();
    assert_eq!(componentes.len(), 2);
    assert_eq!(
        componentes[0].attributes(),
        vec![
            Attribute::new("peso", "20%")?,
            Attribute::new("nome", "QUIZZES")?,
        ]
    );
    assert_eq!(componentes[1].attributes()[0], Attribute::new("peso", "80%")?);
    Ok(())
}

#[test]
fn test_ignored_field_is_skipped() -> TestResult {
    let mut registry = Registry::new();
    registry.register::<Componente>(componente_mapping());
    registry.register::<Fuc>(fuc_mapping());

    let mut fuc = sample_fuc();
    fuc.observacoes = Some("ignored anyway".to_string());
    let node = registry.to_node(&fuc)?;

    assert!(node.attributes().iter().all(|a| a.name() != "observacoes"));
    Ok(())
}

#[test]
fn test_absent_attribute_is_skipped_but_empty_string_is_kept() -> TestResult {
    struct Curso {
        codigo: Option<String>,
    }

    let mut registry = Registry::new();
    registry.register::<Curso>(
        TypeMapping::new("curso")
            .field(FieldMapping::attribute("codigo", |c: &Curso| c.codigo.clone())),
    );

    let absent = registry.to_node(&Curso { codigo: None })?;
    assert!(absent.attributes().is_empty());

    let empty = registry.to_node(&Curso {
        codigo: Some(String::new()),
    })?;
    assert_eq!(empty.attributes(), vec![Attribute::new("codigo", "")?]);
    Ok(())
}

#[test]
fn test_field_names_are_lowercased() -> TestResult {
    struct Curso {
        codigo: String,
    }

    let mut registry = Registry::new();
    registry.register::<Curso>(
        TypeMapping::new("curso")
            .field(FieldMapping::attribute("Codigo", |c: &Curso| {
                Some(c.codigo.clone())
            }))
            .field(FieldMapping::child("Plano", |_: &Curso| {
                ChildValue::text("texto")
            })),
    );

    let node = registry.to_node(&Curso {
        codigo: "M4310".to_string(),
    })?;
    assert_eq!(node.attributes()[0].name(), "codigo");
    assert_eq!(node.children()[0].name(), "plano");
    Ok(())
}

#[test]
fn test_scalar_child_carries_text() -> TestResult {
    struct Avaliado {
        nota: u32,
    }

    let mut registry = Registry::new();
    registry.register::<Avaliado>(
        TypeMapping::new("avaliado")
            .field(FieldMapping::child("nota", |a: &Avaliado| {
                ChildValue::text(a.nota.to_string())
            })),
    );

    let node = registry.to_node(&Avaliado { nota: 18 })?;
    let children = node.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text(), "18");
    assert!(children[0].children().is_empty());
    Ok(())
}

#[test]
fn test_adapter_runs_after_fields() -> TestResult {
    let mut registry = Registry::new();
    registry.register::<Componente>(componente_mapping().adapter(|node: &Node| {
        node.remove_attribute_globally("componente", "peso");
    }));

    let node = registry.to_node(&Componente {
        nome: "Quizzes".to_string(),
        peso: 20,
    })?;

    assert_eq!(node.attributes(), vec![Attribute::new("nome", "QUIZZES")?]);
    Ok(())
}

#[test]
fn test_missing_nested_mapping_aborts_whole_mapping() {
    let mut registry = Registry::new();
    // Fuc is registered but Componente, needed for the avaliacao items, is not
    registry.register::<Fuc>(fuc_mapping());

    let result = registry.to_node(&sample_fuc());
    assert!(matches!(result, Err(xmlgrove::Error::MissingMapping)));
}

#[test]
fn test_sequence_child_text_is_kept_alongside_items() -> TestResult {
    let mut registry = Registry::new();
    registry.register::<Componente>(componente_mapping());
    registry.register::<Avaliacao>(
        TypeMapping::new("avaliacao").field(FieldMapping::child("componentes", componentes_items)),
    );

    let node = registry.to_node(&Avaliacao {
        componentes: vec![Componente {
            nome: "Quizzes".to_string(),
            peso: 20,
        }],
    })?;

    let children = node.children();
    assert_eq!(children[0].text(), "1 componentes");
    assert_eq!(children[0].children().len(), 1);
    Ok(())
}
