//! Integration tests for the per-table repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create then read back
//! - Partial updates, full replaces and NotFound on missing ids
//! - Bulk updates
//! - Stage deletion detaching concerts
//! - Filters and counts

use chrono::NaiveDate;
use festival_db::models::artista::{ArtistaFilter, CreateArtista, UpdateArtista};
use festival_db::models::bilhete::{BilheteFilter, CreateBilhete, UpdateBilhete};
use festival_db::models::concerto::{ConcertoFilter, CreateConcerto, UpdateConcerto};
use festival_db::models::palco::{CreatePalco, UpdatePalco};
use festival_db::repositories::{ArtistaRepo, BilheteRepo, ConcertoRepo, PalcoRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_palco(nome: &str, capacidade: i32) -> CreatePalco {
    CreatePalco {
        nome: nome.to_string(),
        capacidade,
        localizacao: None,
        responsavel: None,
    }
}

fn new_artista(nome: &str, genero: Option<&str>) -> CreateArtista {
    CreateArtista {
        nome: nome.to_string(),
        genero: genero.map(str::to_string),
        pais_origem: None,
        cachet: None,
    }
}

fn new_concerto(palco_id: Option<i64>) -> CreateConcerto {
    CreateConcerto {
        data_hora: NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
        duracao_minutos: None,
        palco_id,
    }
}

fn new_bilhete(tipo: &str, cents: i64) -> CreateBilhete {
    CreateBilhete {
        tipo: tipo.to_string(),
        preco: Decimal::new(cents, 2),
        estado: None,
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_palco(pool: PgPool) {
    let input = CreatePalco {
        nome: "Palco A".to_string(),
        capacidade: 1000,
        localizacao: Some("Relvado".to_string()),
        responsavel: Some("Ana".to_string()),
    };
    let created = PalcoRepo::create(&pool, &input).await.unwrap();
    let fetched = PalcoRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created stage should be readable");

    assert_eq!(fetched, created);
    assert_eq!(fetched.nome, input.nome);
    assert_eq!(fetched.capacidade, input.capacidade);
    assert_eq!(fetched.localizacao, input.localizacao);
    assert_eq!(fetched.responsavel, input.responsavel);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_palco_is_partial(pool: PgPool) {
    let created = PalcoRepo::create(&pool, &new_palco("Original", 500))
        .await
        .unwrap();

    let updated = PalcoRepo::update(
        &pool,
        created.id,
        &UpdatePalco {
            capacidade: Some(750),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.nome, "Original");
    assert_eq!(updated.capacidade, 750);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_ids_are_not_found(pool: PgPool) {
    let missing = 999_999;

    assert!(PalcoRepo::find_by_id(&pool, missing).await.unwrap().is_none());
    assert!(PalcoRepo::update(&pool, missing, &UpdatePalco::default())
        .await
        .unwrap()
        .is_none());
    assert!(PalcoRepo::delete(&pool, missing).await.unwrap().is_none());
    assert!(ArtistaRepo::update(&pool, missing, &UpdateArtista::default())
        .await
        .unwrap()
        .is_none());
    assert!(ArtistaRepo::delete(&pool, missing).await.unwrap().is_none());
    assert!(ConcertoRepo::update(&pool, missing, &UpdateConcerto::default())
        .await
        .unwrap()
        .is_none());
    assert!(ConcertoRepo::delete(&pool, missing).await.unwrap().is_none());
    assert!(BilheteRepo::update(&pool, missing, &UpdateBilhete::default())
        .await
        .unwrap()
        .is_none());
    assert!(BilheteRepo::delete(&pool, missing).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_palco_clears_omitted_columns(pool: PgPool) {
    let created = PalcoRepo::create(
        &pool,
        &CreatePalco {
            localizacao: Some("Norte".to_string()),
            responsavel: Some("Rita".to_string()),
            ..new_palco("Main", 100)
        },
    )
    .await
    .unwrap();

    let replaced = PalcoRepo::replace(&pool, created.id, &new_palco("Main", 150))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.capacidade, 150);
    assert_eq!(replaced.localizacao, None);
    assert_eq!(replaced.responsavel, None);

    let missing = PalcoRepo::replace(&pool, 999_999, &new_palco("Ghost", 1))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_update_palcos(pool: PgPool) {
    PalcoRepo::create(&pool, &new_palco("A", 10)).await.unwrap();
    PalcoRepo::create(&pool, &new_palco("B", 20)).await.unwrap();

    let changed = PalcoRepo::update_all(
        &pool,
        &UpdatePalco {
            responsavel: Some("Rui".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(changed, 2);

    let palcos = PalcoRepo::list(&pool).await.unwrap();
    assert!(palcos.iter().all(|p| p.responsavel.as_deref() == Some("Rui")));
    assert_eq!(palcos[1].capacidade, 20);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_capacity_check_constraint(pool: PgPool) {
    let err = PalcoRepo::create(&pool, &new_palco("Zero", 0))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_palco_detaches_concerts(pool: PgPool) {
    let palco = PalcoRepo::create(&pool, &new_palco("Tenda", 300))
        .await
        .unwrap();
    let c1 = ConcertoRepo::create(&pool, &new_concerto(Some(palco.id)))
        .await
        .unwrap();
    let c2 = ConcertoRepo::create(&pool, &new_concerto(Some(palco.id)))
        .await
        .unwrap();

    let deleted = PalcoRepo::delete(&pool, palco.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, palco.id);

    for id in [c1.id, c2.id] {
        let concerto = ConcertoRepo::find_by_id(&pool, id)
            .await
            .unwrap()
            .expect("concert must survive stage deletion");
        assert_eq!(concerto.palco_id, None);
    }
}

// ---------------------------------------------------------------------------
// Concerts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_palco_of_concert(pool: PgPool) {
    let palco = PalcoRepo::create(&pool, &new_palco("Palco A", 100))
        .await
        .unwrap();
    let staged = ConcertoRepo::create(&pool, &new_concerto(Some(palco.id)))
        .await
        .unwrap();
    let unstaged = ConcertoRepo::create(&pool, &new_concerto(None))
        .await
        .unwrap();

    let found = ConcertoRepo::find_palco(&pool, staged.id).await.unwrap();
    assert_eq!(found, Some(palco));
    assert_eq!(ConcertoRepo::find_palco(&pool, unstaged.id).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concert_defaults_to_sixty_minutes(pool: PgPool) {
    let concerto = ConcertoRepo::create(&pool, &new_concerto(None))
        .await
        .unwrap();
    assert_eq!(concerto.duracao_minutos, 60);
    assert_eq!(concerto.palco_id, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concert_with_unknown_palco_violates_fk(pool: PgPool) {
    let err = ConcertoRepo::create(&pool, &new_concerto(Some(424_242)))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));

    let count = ConcertoRepo::count(&pool, &ConcertoFilter::default())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_concerts_by_palco(pool: PgPool) {
    let a = PalcoRepo::create(&pool, &new_palco("A", 100)).await.unwrap();
    let b = PalcoRepo::create(&pool, &new_palco("B", 100)).await.unwrap();
    ConcertoRepo::create(&pool, &new_concerto(Some(a.id)))
        .await
        .unwrap();
    ConcertoRepo::create(&pool, &new_concerto(Some(a.id)))
        .await
        .unwrap();
    ConcertoRepo::create(&pool, &new_concerto(Some(b.id)))
        .await
        .unwrap();
    ConcertoRepo::create(&pool, &new_concerto(None)).await.unwrap();

    let on_a = ConcertoRepo::list_by_palco(&pool, a.id).await.unwrap();
    assert_eq!(on_a.len(), 2);
    assert!(on_a.iter().all(|c| c.palco_id == Some(a.id)));

    let filtered = ConcertoRepo::list(&pool, &ConcertoFilter { palco_id: Some(b.id) })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);

    let all = ConcertoRepo::list(&pool, &ConcertoFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 4);

    let count_a = ConcertoRepo::count(&pool, &ConcertoFilter { palco_id: Some(a.id) })
        .await
        .unwrap();
    assert_eq!(count_a, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_update_and_delete_by_palco(pool: PgPool) {
    let palco = PalcoRepo::create(&pool, &new_palco("A", 100)).await.unwrap();
    let other = ConcertoRepo::create(&pool, &new_concerto(None)).await.unwrap();
    for _ in 0..3 {
        ConcertoRepo::create(&pool, &new_concerto(Some(palco.id)))
            .await
            .unwrap();
    }

    let changed = ConcertoRepo::update_by_palco(
        &pool,
        palco.id,
        &UpdateConcerto {
            duracao_minutos: Some(45),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(changed, 3);

    let untouched = ConcertoRepo::find_by_id(&pool, other.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.duracao_minutos, 60);

    let removed = ConcertoRepo::delete_by_palco(&pool, palco.id).await.unwrap();
    assert_eq!(removed, 3);
    assert!(ConcertoRepo::find_by_id(&pool, other.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_concert_detaches_stage(pool: PgPool) {
    let palco = PalcoRepo::create(&pool, &new_palco("A", 100)).await.unwrap();
    let created = ConcertoRepo::create(
        &pool,
        &CreateConcerto {
            duracao_minutos: Some(90),
            ..new_concerto(Some(palco.id))
        },
    )
    .await
    .unwrap();

    let replaced = ConcertoRepo::replace(&pool, created.id, &new_concerto(None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.palco_id, None);
    assert_eq!(replaced.duracao_minutos, 60);

    let stage = ConcertoRepo::find_palco(&pool, created.id).await.unwrap();
    assert!(stage.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_update_concerts_without_filter(pool: PgPool) {
    let palco = PalcoRepo::create(&pool, &new_palco("A", 100)).await.unwrap();
    ConcertoRepo::create(&pool, &new_concerto(None)).await.unwrap();
    ConcertoRepo::create(&pool, &new_concerto(Some(palco.id)))
        .await
        .unwrap();

    let changed = ConcertoRepo::update_all(
        &pool,
        &ConcertoFilter::default(),
        &UpdateConcerto {
            palco_id: Some(palco.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(changed, 2);

    let on_stage = ConcertoRepo::count(
        &pool,
        &ConcertoFilter {
            palco_id: Some(palco.id),
        },
    )
    .await
    .unwrap();
    assert_eq!(on_stage, 2);
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_artists_by_genre(pool: PgPool) {
    ArtistaRepo::create(&pool, &new_artista("Muse", Some("Rock")))
        .await
        .unwrap();
    ArtistaRepo::create(&pool, &new_artista("Coldplay", Some("Pop")))
        .await
        .unwrap();
    ArtistaRepo::create(&pool, &new_artista("Sem Genero", None))
        .await
        .unwrap();

    let rock = ArtistaRepo::list(
        &pool,
        &ArtistaFilter {
            genero: Some("Rock".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(rock.len(), 1);
    assert_eq!(rock[0].nome, "Muse");

    let all = ArtistaRepo::list(&pool, &ArtistaFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_artist_fee_keeps_two_decimals(pool: PgPool) {
    let created = ArtistaRepo::create(
        &pool,
        &CreateArtista {
            cachet: Some(Decimal::new(1_234_550, 2)),
            ..new_artista("X", None)
        },
    )
    .await
    .unwrap();
    assert_eq!(created.cachet, Some(Decimal::new(1_234_550, 2)));

    let updated = ArtistaRepo::update(
        &pool,
        created.id,
        &UpdateArtista {
            nome: Some("Y".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.nome, "Y");
    assert_eq!(updated.cachet, created.cachet);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_artist_clears_fee(pool: PgPool) {
    let created = ArtistaRepo::create(
        &pool,
        &CreateArtista {
            cachet: Some(Decimal::new(150_000, 2)),
            pais_origem: Some("Portugal".to_string()),
            ..new_artista("Ana", Some("Fado"))
        },
    )
    .await
    .unwrap();

    let replaced = ArtistaRepo::replace(&pool, created.id, &new_artista("Ana Moura", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.nome, "Ana Moura");
    assert_eq!(replaced.genero, None);
    assert_eq!(replaced.pais_origem, None);
    assert_eq!(replaced.cachet, None);
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_ticket_defaults_and_replace(pool: PgPool) {
    let created = BilheteRepo::create(&pool, &new_bilhete("VIP", 12_000))
        .await
        .unwrap();
    assert_eq!(created.estado, "disponivel");

    let sold = BilheteRepo::update(
        &pool,
        created.id,
        &UpdateBilhete {
            estado: Some("vendido".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(sold.estado, "vendido");
    assert_eq!(sold.tipo, "VIP");

    let replaced = BilheteRepo::replace(&pool, created.id, &new_bilhete("Geral", 6_500))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.tipo, "Geral");
    assert_eq!(replaced.preco, Decimal::new(6_500, 2));
    assert_eq!(replaced.estado, "disponivel");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ticket_bulk_update_by_filter(pool: PgPool) {
    for _ in 0..3 {
        BilheteRepo::create(&pool, &new_bilhete("VIP", 12_000))
            .await
            .unwrap();
    }
    for _ in 0..2 {
        BilheteRepo::create(&pool, &new_bilhete("Geral", 6_500))
            .await
            .unwrap();
    }

    let vip = BilheteFilter {
        tipo: Some("VIP".to_string()),
        estado: None,
    };
    let changed = BilheteRepo::update_all(
        &pool,
        &vip,
        &UpdateBilhete {
            estado: Some("reservado".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(changed, 3);

    let reserved = BilheteFilter {
        tipo: None,
        estado: Some("reservado".to_string()),
    };
    assert_eq!(BilheteRepo::count(&pool, &reserved).await.unwrap(), 3);
    assert_eq!(
        BilheteRepo::count(&pool, &BilheteFilter::default())
            .await
            .unwrap(),
        5
    );
    let geral = BilheteRepo::list(
        &pool,
        &BilheteFilter {
            tipo: Some("Geral".to_string()),
            estado: None,
        },
    )
    .await
    .unwrap();
    assert!(geral.iter().all(|b| b.estado == "disponivel"));
}
