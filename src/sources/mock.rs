use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::AppError;
use crate::models::Job;
use crate::sources::{JobSource, restrict_to_query};

pub const CATEGORIES: [&str; 11] = [
    "Tecnologia da Informação",
    "Petróleo e Gás",
    "Finanças",
    "Saúde",
    "Educação",
    "Administração",
    "Logística",
    "Vendas",
    "Marketing",
    "Engenharia Civil",
    "Recursos Humanos",
];

pub const LOCATIONS: [&str; 8] = [
    "Luanda", "Huambo", "Benguela", "Lubango", "Malanje", "Lobito", "Namibe", "Cabinda",
];

pub const JOB_TYPES: [&str; 5] = [
    "Tempo Integral",
    "Meio Período",
    "Freelance",
    "Estágio",
    "Temporário",
];

pub const COMPANIES: [&str; 13] = [
    "Sonangol",
    "BFA Angola",
    "Unitel",
    "Odebrecht Angola",
    "Total Angola",
    "Chevron Angola",
    "Angola Cables",
    "Banco BIC",
    "Angola Telecom",
    "Multitel Angola",
    "BAI Angola",
    "TAAG Angola",
    "Endiama",
];

const GENERIC_ROLES: [&str; 6] = [
    "Analista",
    "Gerente",
    "Coordenador",
    "Assistente",
    "Especialista",
    "Consultor",
];

pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Titles for categories with a dedicated list.
fn titles_for(category: &str) -> Option<&'static [&'static str]> {
    let titles: &'static [&'static str] = match category {
        "Tecnologia da Informação" => &[
            "Desenvolvedor Web",
            "Analista de Sistemas",
            "Engenheiro de Software",
            "Especialista em Segurança da Informação",
            "Técnico de Suporte",
            "Analista de Dados",
        ],
        "Petróleo e Gás" => &[
            "Engenheiro de Petróleo",
            "Geólogo",
            "Técnico de Produção",
            "Especialista em Perfuração",
            "Analista de Reservatórios",
        ],
        "Finanças" => &[
            "Contador",
            "Analista Financeiro",
            "Gerente de Contas",
            "Auditor",
            "Especialista em Investimentos",
        ],
        "Saúde" => &[
            "Médico",
            "Enfermeiro",
            "Técnico de Laboratório",
            "Farmacêutico",
            "Fisioterapeuta",
        ],
        "Educação" => &[
            "Professor",
            "Coordenador Pedagógico",
            "Tutor",
            "Instrutor de Idiomas",
            "Pesquisador",
        ],
        _ => return None,
    };
    Some(titles)
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Simulated scraper producing a batch of synthetic Angolan postings.
pub struct MockSource {
    batch_size: usize,
    delay: Duration,
    seed: Option<u64>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, DEFAULT_DELAY, None)
    }
}

impl MockSource {
    pub fn new(batch_size: usize, delay: Duration, seed: Option<u64>) -> Self {
        Self {
            batch_size,
            delay,
            seed,
        }
    }

    /// Build one batch relative to `now`. With a seed, the same `now`
    /// always yields the same batch.
    pub fn generate(&self, now: DateTime<Utc>) -> Vec<Job> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        (1..=self.batch_size)
            .map(|i| generate_job(&mut rng, i, now))
            .collect()
    }
}

fn generate_job<R: Rng>(rng: &mut R, index: usize, now: DateTime<Utc>) -> Job {
    let category = pick(rng, &CATEGORIES);
    let company = pick(rng, &COMPANIES);
    let location = pick(rng, &LOCATIONS);
    let job_type = pick(rng, &JOB_TYPES);

    let title = match titles_for(category) {
        Some(titles) => pick(rng, titles).to_string(),
        None => format!("{} de {category}", pick(rng, &GENERIC_ROLES)),
    };

    let salary = rng
        .random_bool(0.7)
        .then(|| rng.random_range(100_000..500_000u64));

    let days_ago = rng.random_range(0..30i64);
    let published = now - TimeDelta::days(days_ago);

    Job {
        id: format!("job-{index}"),
        description: describe(&title, company, location, category, salary),
        short_description: format!(
            "Estamos procurando um {title} para trabalhar em nossa unidade de {location}. O candidato ideal deve ter experiência na área de {category}."
        ),
        requirements: Some(vec![
            format!("Formação em {category}"),
            "Experiência mínima de 2 anos".to_string(),
            "Conhecimentos em ferramentas específicas".to_string(),
            "Capacidade de trabalhar em equipe".to_string(),
            "Boas habilidades de comunicação".to_string(),
        ]),
        title,
        company: company.to_string(),
        location: location.to_string(),
        salary,
        category: category.to_string(),
        job_type: job_type.to_string(),
        published_date: published.to_rfc3339_opts(SecondsFormat::Millis, true),
        apply_url: "#".to_string(),
    }
}

fn describe(
    title: &str,
    company: &str,
    location: &str,
    category: &str,
    salary: Option<u64>,
) -> String {
    let pay = salary
        .map(|s| format!(": aproximadamente {s} AOA"))
        .unwrap_or_default();
    format!(
        r#"<p><strong>Sobre a Vaga:</strong></p>
<p>A {company} está contratando um(a) {title} para trabalhar em {location}. O candidato ideal deve ter experiência na área e conhecimentos em {category}.</p>
<p><strong>Responsabilidades:</strong></p>
<ul>
  <li>Realizar atividades relacionadas à função de {title}</li>
  <li>Trabalhar em equipe para atingir metas estabelecidas</li>
  <li>Contribuir para o crescimento da empresa na área de {category}</li>
  <li>Reportar diretamente ao gerente de departamento</li>
  <li>Participar de reuniões periódicas de acompanhamento</li>
</ul>
<p><strong>Qualificações:</strong></p>
<ul>
  <li>Formação acadêmica em área relacionada</li>
  <li>Experiência mínima de 2 anos em funções similares</li>
  <li>Conhecimentos avançados em ferramentas específicas da área</li>
  <li>Habilidades de comunicação e trabalho em equipe</li>
  <li>Domínio de Português, conhecimentos de Inglês desejáveis</li>
</ul>
<p><strong>Benefícios:</strong></p>
<ul>
  <li>Salário competitivo{pay}</li>
  <li>Plano de saúde</li>
  <li>Vale alimentação</li>
  <li>Oportunidades de desenvolvimento profissional</li>
</ul>"#
    )
}

#[async_trait]
impl JobSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_jobs(&self, query: Option<&str>) -> Result<Vec<Job>, AppError> {
        tracing::info!("Fetching jobs from '{}' (query: {:?})", self.name(), query);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let jobs = restrict_to_query(self.generate(Utc::now()), query);
        tracing::info!("Source '{}' returned {} jobs", self.name(), jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn source(seed: u64) -> MockSource {
        MockSource::new(DEFAULT_BATCH_SIZE, Duration::ZERO, Some(seed))
    }

    #[test]
    fn batch_has_unique_sequential_ids() {
        let jobs = source(7).generate(Utc::now());
        assert_eq!(jobs.len(), DEFAULT_BATCH_SIZE);
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), DEFAULT_BATCH_SIZE);
        assert_eq!(jobs[0].id, "job-1");
        assert_eq!(jobs[99].id, "job-100");
    }

    #[test]
    fn fields_come_from_catalogs() {
        let now = Utc::now();
        for job in source(11).generate(now) {
            assert!(CATEGORIES.contains(&job.category.as_str()));
            assert!(LOCATIONS.contains(&job.location.as_str()));
            assert!(COMPANIES.contains(&job.company.as_str()));
            assert!(JOB_TYPES.contains(&job.job_type.as_str()));
            if let Some(salary) = job.salary {
                assert!((100_000..500_000).contains(&salary));
                assert!(job.description.contains(&format!("aproximadamente {salary} AOA")));
            }
            let published = job.published_at().expect("valid date");
            assert!(published <= now);
            assert!(now - published < TimeDelta::days(30));
            assert!(job.published_date.ends_with('Z'));
            let requirements = job.requirements.expect("requirements");
            assert_eq!(requirements.len(), 5);
            assert_eq!(requirements[0], format!("Formação em {}", job.category));
        }
    }

    #[test]
    fn pick_draws_every_item() {
        let mut rng = StdRng::seed_from_u64(5);
        let drawn: HashSet<&str> = (0..500).map(|_| pick(&mut rng, &LOCATIONS)).collect();
        assert_eq!(drawn.len(), LOCATIONS.len());
        assert_eq!(pick(&mut rng, &[]), "");
    }

    #[test]
    fn titles_follow_category() {
        for job in source(3).generate(Utc::now()) {
            match titles_for(&job.category) {
                Some(titles) => assert!(titles.contains(&job.title.as_str())),
                None => assert!(job.title.ends_with(&format!(" de {}", job.category))),
            }
        }
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let now = Utc::now();
        assert_eq!(source(42).generate(now), source(42).generate(now));
    }

    #[test]
    fn some_salaries_are_undisclosed() {
        let jobs = MockSource::new(1000, Duration::ZERO, Some(5)).generate(Utc::now());
        let disclosed = jobs.iter().filter(|j| j.salary.is_some()).count();
        assert!(disclosed > 550 && disclosed < 850, "disclosed = {disclosed}");
    }

    #[tokio::test]
    async fn query_restricts_results() {
        let jobs = source(9).fetch_jobs(Some("sonangol")).await.unwrap();
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.matches_query("sonangol")));

        let all = source(9).fetch_jobs(Some("")).await.unwrap();
        assert_eq!(all.len(), DEFAULT_BATCH_SIZE);
    }
}
