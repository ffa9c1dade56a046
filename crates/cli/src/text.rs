//! Fixed console strings shown to the operator.

pub const MENU_OPTIONS: [&str; 5] = [
    "1. Cadastrar paciente",
    "2. Ver estatísticas",
    "3. Buscar paciente",
    "4. Listar todos os pacientes",
    "5. Sair",
];

pub const PROMPT_OPTION: &str = "Escolha uma opção: ";
pub const PROMPT_NAME: &str = "Nome do paciente: ";
pub const PROMPT_AGE: &str = "Idade: ";
pub const PROMPT_PHONE: &str = "Telefone: ";
pub const PROMPT_SEARCH_NAME: &str = "Digite o nome do paciente: ";

pub const INVALID_OPTION: &str = "Opção inválida!";
pub const INVALID_AGE: &str = "Idade inválida! Digite um número inteiro não negativo.";
pub const NOT_FOUND: &str = "Paciente não encontrado.";
pub const NO_PATIENTS: &str = "Nenhum paciente cadastrado.";
pub const EXITING: &str = "Saindo...";

/// Shown in place of the youngest/oldest age when nobody is registered.
pub const NO_AGE: &str = "None";
