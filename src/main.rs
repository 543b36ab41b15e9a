//! Interactive menu over a [`LibraryService`]: numbered choices for add,
//! list, delete, edit, and PDF export, looping until the user quits.
//!
//! All catalog logic lives in the library; this binary only reads input,
//! calls the service, and prints the outcome, so nothing here is load
//! bearing for the data itself.

use std::process;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use biblio_core::BiblioError;
use biblio_core::catalog::CatalogError;
use biblio_core::domain::{Book, BookPatch, valid_id};
use biblio_core::service::LibraryService;
use biblio_core::store::layout::Library;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let library = match Library::in_documents() {
        Ok(library) => library,
        Err(err) => {
            eprintln!("Terjadi kesalahan saat menyiapkan direktori ({err})");
            process::exit(1);
        }
    };

    let mut service = match LibraryService::open(library) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Terjadi kesalahan saat membaca data buku ({err})");
            process::exit(1);
        }
    };

    if let Err(err) = run(&mut service) {
        match err {
            // Ctrl-C / Ctrl-D are a normal way out of the menu.
            ReadlineError::Interrupted | ReadlineError::Eof => {}
            err => {
                eprintln!("Terjadi kesalahan pada input ({err})");
                process::exit(1);
            }
        }
    }
}

fn run(service: &mut LibraryService) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        println!();
        println!("Menu Perpustakaan:");
        println!("1. Tambah Buku");
        println!("2. Tampilkan Daftar Buku");
        println!("3. Hapus Buku");
        println!("4. Edit Buku");
        println!("5. Print Buku");
        println!("6. Keluar");

        let choice = match editor.readline("Pilih menu (1-6): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err),
        };

        match choice.trim() {
            "1" => add_book(&mut editor, service)?,
            "2" => list_books(service),
            "3" => delete_book(&mut editor, service)?,
            "4" => edit_book(&mut editor, service)?,
            "5" => print_books(&mut editor, service)?,
            "6" => return Ok(()),
            _ => println!("Input tidak valid"),
        }
    }
}

fn add_book(editor: &mut DefaultEditor, service: &mut LibraryService) -> rustyline::Result<()> {
    // Keep asking until the id is both valid and unused.
    let id = loop {
        let raw = editor.readline("Masukkan ID Buku: ")?;
        match valid_id(&raw) {
            Ok(id) if !service.catalog().contains(&id) => break id,
            Ok(_) => println!("ID Buku sudah digunakan"),
            Err(_) => println!("Input tidak valid"),
        }
    };

    let title = editor.readline("Masukkan Judul Buku: ")?;
    let author = editor.readline("Masukkan Nama Penulis: ")?;
    let publisher = editor.readline("Masukkan Nama Penerbit: ")?;
    let page_count = editor.readline("Masukkan Jumlah Halaman: ")?;
    let year = editor.readline("Masukkan Tahun Terbit: ")?;

    let book = match Book::from_input(&id, &title, &author, &publisher, &page_count, &year) {
        Ok(book) => book,
        Err(_) => {
            println!("Input tidak valid");
            return Ok(());
        }
    };

    match service.add_book(book) {
        Ok(()) => println!("Buku berhasil ditambahkan"),
        Err(err) => println!("Terjadi kesalahan saat menyimpan data buku ({err})"),
    }
    Ok(())
}

fn list_books(service: &LibraryService) {
    println!();
    println!("Daftar Buku:");
    for line in service.list_lines() {
        println!("{line}");
    }
}

fn delete_book(editor: &mut DefaultEditor, service: &mut LibraryService) -> rustyline::Result<()> {
    let id = editor.readline("Masukkan ID Buku: ")?;

    match service.remove_book(id.trim()) {
        Ok(()) => println!("Buku berhasil dihapus"),
        Err(BiblioError::Catalog(CatalogError::NotFound(_))) => println!("Buku tidak ditemukan"),
        Err(err) => println!("Terjadi kesalahan saat menghapus buku ({err})"),
    }
    Ok(())
}

fn edit_book(editor: &mut DefaultEditor, service: &mut LibraryService) -> rustyline::Result<()> {
    let id = editor.readline("Masukkan ID Buku: ")?;
    let id = id.trim().to_owned();

    if !service.catalog().contains(&id) {
        println!("Buku tidak ditemukan");
        return Ok(());
    }

    let title = editor.readline("Masukkan Judul Buku (kosongkan untuk tidak mengubah): ")?;
    let author = editor.readline("Masukkan Nama Penulis (kosongkan untuk tidak mengubah): ")?;
    let publisher = editor.readline("Masukkan Nama Penerbit (kosongkan untuk tidak mengubah): ")?;
    let page_count = editor.readline("Masukkan Jumlah Halaman (kosongkan untuk tidak mengubah): ")?;
    let year = editor.readline("Masukkan Tahun Terbit (kosongkan untuk tidak mengubah): ")?;

    let patch = match BookPatch::parse(&title, &author, &publisher, &page_count, &year) {
        Ok(patch) => patch,
        Err(_) => {
            println!("Input tidak valid");
            return Ok(());
        }
    };

    match service.update_book(&id, &patch) {
        Ok(()) => println!("Buku berhasil diubah"),
        Err(err) => println!("Terjadi kesalahan saat menyimpan data buku ({err})"),
    }
    Ok(())
}

fn print_books(editor: &mut DefaultEditor, service: &LibraryService) -> rustyline::Result<()> {
    println!("Pilihan:");
    println!("1. Cetak semua buku");
    println!("2. Cetak berdasarkan ID");

    let choice = editor.readline("Pilih cara pencetakan (1/2): ")?;
    match choice.trim() {
        "1" => match service.export_all() {
            Ok(path) => println!(
                "Data seluruh buku berhasil di-print ke PDF ({})",
                path.display()
            ),
            Err(err) => println!("Terjadi kesalahan saat menyimpan file PDF ({err})"),
        },
        "2" => {
            let id = editor.readline("Masukkan ID Buku: ")?;
            let id = id.trim();
            match service.export_one(id) {
                Ok(path) => println!(
                    "Buku dengan ID {id} berhasil di-print ke PDF ({})",
                    path.display()
                ),
                Err(BiblioError::Catalog(CatalogError::NotFound(_))) => {
                    println!("Buku tidak ditemukan");
                }
                Err(err) => println!("Terjadi kesalahan saat menyimpan file PDF ({err})"),
            }
        }
        _ => println!("Input tidak valid"),
    }
    Ok(())
}
