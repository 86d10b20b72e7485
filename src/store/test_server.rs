//! Local HTTP server for store tests: answers a fixed list of requests in
//! order, then stops listening.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub request_line: String,
    pub body: String,
}

/// Serve `responses` (status line, JSON body), one per connection.
/// Returns the base URL and a handle yielding what each request carried.
pub fn serve(responses: Vec<(&'static str, String)>) -> (String, thread::JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
            }

            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();

            seen.push(Recorded {
                request_line: request_line.trim_end().to_string(),
                body: String::from_utf8(request_body).unwrap(),
            });
        }
        seen
    });

    (format!("http://{addr}"), handle)
}
