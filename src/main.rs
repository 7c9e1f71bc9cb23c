use office_to_pdf::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，輸出目錄：{}", output.output_path);
            println!(
                "{} 個檔案轉換成功，{} 個檔案轉換失敗。輸出檔案位於：{}",
                output.summary.success, output.summary.failed, output.output_path
            );
            if output.summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("錯誤：{}", e);
            std::process::exit(1);
        }
    }
}
