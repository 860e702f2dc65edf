//! Demo data for manual testing.
//!
//! [`run`] wipes the five tables and repopulates them inside one
//! transaction: either the whole data set is written or nothing changes.
//! Every foreign key written points at an id generated earlier in the same
//! run.

use chrono::{Duration, Local, NaiveTime};
use festival_core::types::DbId;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::artista::CreateArtista;
use crate::models::bilhete::CreateBilhete;
use crate::models::concerto::CreateConcerto;
use crate::models::palco::CreatePalco;
use crate::repositories::{AlinhamentoRepo, ArtistaRepo, BilheteRepo, ConcertoRepo, PalcoRepo};

/// Chance that a concert gets a second artist after the headliner.
pub const SECONDARY_ARTIST_PROBABILITY: f64 = 0.5;

pub const ARTIST_COUNT: usize = 30;
pub const CONCERT_COUNT: usize = 30;
pub const TICKET_COUNT: usize = 35;

/// Child tables first so no delete trips a foreign key.
const CLEAR_ORDER: &[&str] = &["alinhamento", "bilhetes", "concertos", "artistas", "palcos"];

const STAGES: &[(&str, i32, &str, &str)] = &[
    ("Palco NOS", 85_000, "Relvado Principal", "Roberto Medina"),
    ("Palco Heineken", 15_000, "Tenda Norte", "Zé da Tenda"),
    ("Palco Comédia", 5_000, "Auditório", "Ricardo Araújo"),
    ("Palco Som", 2_000, "Piscina", "DJ Vibe"),
];

const ARTIST_NAMES: &[&str] = &[
    "Metallica",
    "Muse",
    "Daft Punk",
    "Foo Fighters",
    "Pearl Jam",
    "Arctic Monkeys",
    "Coldplay",
    "Red Hot Chili Peppers",
    "The Strokes",
    "Radiohead",
    "Gorillaz",
    "Queen",
    "Nirvana",
    "AC/DC",
    "Pink Floyd",
    "Led Zeppelin",
    "The Beatles",
    "David Bowie",
    "Prince",
    "U2",
    "Green Day",
    "Linkin Park",
    "System of a Down",
    "Rammstein",
    "Iron Maiden",
    "Black Sabbath",
    "Slipknot",
    "Korn",
    "Limp Bizkit",
    "The Killers",
];

const CONCERT_DURATION_MINUTES: i32 = 90;

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub palcos: usize,
    pub artistas: usize,
    pub concertos: usize,
    pub bilhetes: usize,
    pub alinhamentos: usize,
}

/// Reset the schema's data and repopulate it.
pub async fn run<R: Rng + ?Sized>(pool: &PgPool, rng: &mut R) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for table in CLEAR_ORDER {
        let removed = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!(table, removed, "Cleared table");
    }

    let mut palco_ids: Vec<DbId> = Vec::with_capacity(STAGES.len());
    for (nome, capacidade, localizacao, responsavel) in STAGES {
        let palco = PalcoRepo::create(
            &mut *tx,
            &CreatePalco {
                nome: (*nome).to_string(),
                capacidade: *capacidade,
                localizacao: Some((*localizacao).to_string()),
                responsavel: Some((*responsavel).to_string()),
            },
        )
        .await?;
        palco_ids.push(palco.id);
    }
    report.palcos = palco_ids.len();

    let mut artista_ids: Vec<DbId> = Vec::with_capacity(ARTIST_COUNT);
    for i in 0..ARTIST_COUNT {
        let nome = ARTIST_NAMES
            .get(i)
            .map(|n| (*n).to_string())
            .unwrap_or_else(|| format!("Artista Genérico {i}"));
        let genero = if i % 2 == 0 { "Rock" } else { "Pop/Alternative" };
        let cachet = Decimal::from(rng.random_range(10_000i64..60_000));

        let artista = ArtistaRepo::create(
            &mut *tx,
            &CreateArtista {
                nome,
                genero: Some(genero.to_string()),
                pais_origem: Some("Internacional".to_string()),
                cachet: Some(cachet),
            },
        )
        .await?;
        artista_ids.push(artista.id);
    }
    report.artistas = artista_ids.len();

    // One concert a night at 20:00, starting today.
    let first_night = Local::now()
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default());
    let mut concerto_ids: Vec<DbId> = Vec::with_capacity(CONCERT_COUNT);
    for day in 0..CONCERT_COUNT {
        let concerto = ConcertoRepo::create(
            &mut *tx,
            &CreateConcerto {
                data_hora: first_night + Duration::days(day as i64),
                duracao_minutos: Some(CONCERT_DURATION_MINUTES),
                palco_id: palco_ids.choose(rng).copied(),
            },
        )
        .await?;
        concerto_ids.push(concerto.id);
    }
    report.concertos = concerto_ids.len();

    for i in 0..TICKET_COUNT {
        let (tipo, preco) = if i % 3 == 0 {
            ("VIP", Decimal::new(12_000, 2))
        } else {
            ("Geral", Decimal::new(6_500, 2))
        };
        BilheteRepo::create(
            &mut *tx,
            &CreateBilhete {
                tipo: tipo.to_string(),
                preco,
                estado: Some("vendido".to_string()),
            },
        )
        .await?;
        report.bilhetes += 1;
    }

    for &concerto_id in &concerto_ids {
        let Some(&headliner) = artista_ids.choose(rng) else {
            break;
        };
        if AlinhamentoRepo::insert_if_absent(&mut *tx, concerto_id, headliner, Some(1))
            .await?
            .is_some()
        {
            report.alinhamentos += 1;
        }

        if rng.random_bool(SECONDARY_ARTIST_PROBABILITY) {
            let others: Vec<DbId> = artista_ids
                .iter()
                .copied()
                .filter(|&id| id != headliner)
                .collect();
            if let Some(&support) = others.choose(rng) {
                if AlinhamentoRepo::insert_if_absent(&mut *tx, concerto_id, support, Some(2))
                    .await?
                    .is_some()
                {
                    report.alinhamentos += 1;
                }
            }
        }
    }

    tx.commit().await?;
    tracing::info!(?report, "Seed data written");
    Ok(report)
}
