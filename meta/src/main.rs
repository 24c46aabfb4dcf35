fn main() {
    multiversx_sc_meta_lib::cli_main::<public_fund::AbiProvider>();
}
