pub mod cpf_cnpj;
