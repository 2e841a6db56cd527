pub mod cliente_controller;
pub mod escala_controller;
pub mod folga_controller;
pub mod garagem_controller;
pub mod itinerario_controller;
pub mod linha_controller;
pub mod motorista_controller;
pub mod painel_controller;
pub mod usuario_controller;
pub mod veiculo_controller;
pub mod viagem_extra_controller;
