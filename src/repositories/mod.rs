//! Acesso ao banco
//!
//! Escalas, itinerários, folgas e o dashboard ficam atrás de traits para
//! que a aplicação aceite outras implementações de armazenamento; os
//! cadastros simples são structs diretas sobre o `PgPool`.

pub mod cliente_repository;
pub mod dashboard_repository;
pub mod escala_repository;
pub mod folga_repository;
pub mod garagem_repository;
pub mod itinerario_repository;
pub mod linha_repository;
pub mod motorista_repository;
pub mod painel_repository;
pub mod usuario_repository;
pub mod veiculo_repository;
pub mod viagem_extra_repository;

pub use dashboard_repository::{DashboardRepository, PgDashboardRepository};
pub use escala_repository::{EscalaRepository, PgEscalaRepository};
pub use folga_repository::{FolgaRepository, PgFolgaRepository};
pub use itinerario_repository::{ItinerarioRepository, PgItinerarioRepository};
